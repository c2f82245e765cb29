//! ShellCoordinator - owns the window session and enforces shell-wide rules
//!
//! All user gestures arrive as [`ShellEvent`]s. Transitions are synchronous
//! and total: events that do not apply to the current state (closing a window
//! that is not open, dragging a fullscreen window, ...) are no-ops.
//!
//! Rules enforced here:
//! - at most one window is fullscreen (the registry's single slot);
//! - the dock is visible exactly when the slot is empty;
//! - a fullscreen window cannot be dragged.

use serde::{Deserialize, Serialize};

use crate::config::{FullScreenExitPolicy, ShellConfig};
use crate::geometry::Offset;
use crate::panel::PanelKind;
use crate::registry::WindowRegistry;
use crate::snapshot::{LauncherView, ShellSnapshot, WindowView};

/// Input gestures understood by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShellEvent {
    /// Dock launcher activated
    Open { id: PanelKind },
    /// Close control clicked
    Close { id: PanelKind },
    /// Fullscreen control clicked
    ToggleFullScreen { id: PanelKind },
    EnterFullScreen { id: PanelKind },
    ExitFullScreen { id: PanelKind },
    /// Pointer pressed on a title bar
    DragStart {
        id: PanelKind,
        pointer_id: i32,
        pointer: Offset,
    },
    DragMove {
        id: PanelKind,
        pointer_id: i32,
        pointer: Offset,
    },
    /// Pointer released; the current offset is committed
    DragEnd { id: PanelKind, pointer_id: i32 },
    /// Pointer capture lost; the offset reverts to where the drag began
    DragCancel { id: PanelKind, pointer_id: i32 },
}

impl ShellEvent {
    pub fn target(&self) -> PanelKind {
        match *self {
            ShellEvent::Open { id }
            | ShellEvent::Close { id }
            | ShellEvent::ToggleFullScreen { id }
            | ShellEvent::EnterFullScreen { id }
            | ShellEvent::ExitFullScreen { id }
            | ShellEvent::DragStart { id, .. }
            | ShellEvent::DragMove { id, .. }
            | ShellEvent::DragEnd { id, .. }
            | ShellEvent::DragCancel { id, .. } => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCoordinator {
    registry: WindowRegistry,
    anchor: Offset,
    exit_policy: FullScreenExitPolicy,
}

impl Default for ShellCoordinator {
    fn default() -> Self {
        Self::new(&ShellConfig::default())
    }
}

impl ShellCoordinator {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            registry: WindowRegistry::new(),
            anchor: config.default_anchor,
            exit_policy: config.fullscreen_exit,
        }
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn fullscreen(&self) -> Option<PanelKind> {
        self.registry.fullscreen()
    }

    pub fn dock_visible(&self) -> bool {
        self.registry.fullscreen().is_none()
    }

    pub fn is_open(&self, id: PanelKind) -> bool {
        self.registry.is_open(id)
    }

    pub fn open(&mut self, id: PanelKind) -> bool {
        self.registry.open(id, self.anchor)
    }

    pub fn close(&mut self, id: PanelKind) -> bool {
        self.registry.close(id)
    }

    /// Make `id` the fullscreen window.
    ///
    /// A different window already holding the slot drops back to its
    /// windowed frame.
    pub fn enter_full_screen(&mut self, id: PanelKind) -> bool {
        if !self.registry.is_open(id) || self.registry.is_full_screen(id) {
            return false;
        }

        if let Some(previous) = self.registry.fullscreen() {
            tracing::debug!(from = %previous, to = %id, "fullscreen slot handed over");
            self.release_full_screen(previous);
        }

        if let Some(entry) = self.registry.entry_mut(id) {
            entry.enter_full_screen();
        }
        self.registry.set_fullscreen(Some(id));
        tracing::debug!(panel = %id, "entered fullscreen");
        true
    }

    pub fn exit_full_screen(&mut self, id: PanelKind) -> bool {
        if !self.registry.is_full_screen(id) {
            return false;
        }
        self.release_full_screen(id);
        self.registry.set_fullscreen(None);
        tracing::debug!(panel = %id, "exited fullscreen");
        true
    }

    pub fn toggle_full_screen(&mut self, id: PanelKind) -> bool {
        if self.registry.is_full_screen(id) {
            self.exit_full_screen(id)
        } else {
            self.enter_full_screen(id)
        }
    }

    pub fn begin_drag(&mut self, id: PanelKind, pointer_id: i32, pointer: Offset) -> bool {
        if self.registry.is_full_screen(id) {
            return false;
        }
        self.registry
            .entry_mut(id)
            .is_some_and(|entry| entry.begin_drag(pointer_id, pointer))
    }

    pub fn drag_to(&mut self, id: PanelKind, pointer_id: i32, pointer: Offset) -> bool {
        if self.registry.is_full_screen(id) {
            return false;
        }
        self.registry
            .entry_mut(id)
            .is_some_and(|entry| entry.drag_to(pointer_id, pointer))
    }

    pub fn end_drag(&mut self, id: PanelKind, pointer_id: i32) -> bool {
        self.registry
            .entry_mut(id)
            .is_some_and(|entry| entry.end_drag(pointer_id))
    }

    pub fn cancel_drag(&mut self, id: PanelKind, pointer_id: i32) -> bool {
        self.registry
            .entry_mut(id)
            .is_some_and(|entry| entry.cancel_drag(pointer_id))
    }

    /// Apply one gesture. Returns `true` if any state changed.
    pub fn apply(&mut self, event: ShellEvent) -> bool {
        match event {
            ShellEvent::Open { id } => self.open(id),
            ShellEvent::Close { id } => self.close(id),
            ShellEvent::ToggleFullScreen { id } => self.toggle_full_screen(id),
            ShellEvent::EnterFullScreen { id } => self.enter_full_screen(id),
            ShellEvent::ExitFullScreen { id } => self.exit_full_screen(id),
            ShellEvent::DragStart {
                id,
                pointer_id,
                pointer,
            } => self.begin_drag(id, pointer_id, pointer),
            ShellEvent::DragMove {
                id,
                pointer_id,
                pointer,
            } => self.drag_to(id, pointer_id, pointer),
            ShellEvent::DragEnd { id, pointer_id } => self.end_drag(id, pointer_id),
            ShellEvent::DragCancel { id, pointer_id } => self.cancel_drag(id, pointer_id),
        }
    }

    /// Owned-state form of [`apply`](Self::apply).
    pub fn reduce(mut self, event: ShellEvent) -> Self {
        self.apply(event);
        self
    }

    /// Everything the presentation layer needs for one render.
    pub fn snapshot(&self) -> ShellSnapshot {
        let windows = self
            .registry
            .entries()
            .iter()
            .map(|entry| WindowView {
                id: entry.id(),
                title: entry.id().title().to_string(),
                position: entry.position(),
                is_full_screen: self.registry.is_full_screen(entry.id()),
                is_dragging: entry.is_dragging(),
                drag_pointer: entry.drag().map(|session| session.pointer_id),
            })
            .collect();

        let launchers = PanelKind::ALL
            .into_iter()
            .map(|kind| LauncherView {
                kind,
                label: kind.dock_label().to_string(),
                icon: kind.icon().to_string(),
                active: self.registry.is_open(kind),
            })
            .collect();

        ShellSnapshot {
            windows,
            fullscreen: self.registry.fullscreen(),
            dock_visible: self.dock_visible(),
            launchers,
        }
    }

    fn release_full_screen(&mut self, id: PanelKind) {
        let (policy, anchor) = (self.exit_policy, self.anchor);
        if let Some(entry) = self.registry.entry_mut(id) {
            entry.exit_full_screen(policy, anchor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinator_with(ids: &[PanelKind]) -> ShellCoordinator {
        let mut shell = ShellCoordinator::default();
        for &id in ids {
            shell.open(id);
        }
        shell
    }

    #[test]
    fn toggle_enters_then_exits() {
        let mut shell = coordinator_with(&[PanelKind::Parks]);
        assert!(shell.dock_visible());

        assert!(shell.toggle_full_screen(PanelKind::Parks));
        assert_eq!(shell.fullscreen(), Some(PanelKind::Parks));
        assert!(!shell.dock_visible());

        assert!(shell.toggle_full_screen(PanelKind::Parks));
        assert_eq!(shell.fullscreen(), None);
        assert!(shell.dock_visible());
    }

    #[test]
    fn toggle_on_closed_window_is_noop() {
        let mut shell = coordinator_with(&[PanelKind::Parks]);
        assert!(!shell.toggle_full_screen(PanelKind::Whispers));
        assert!(shell.dock_visible());
    }

    #[test]
    fn second_enter_takes_over_the_slot() {
        let mut shell = coordinator_with(&[PanelKind::Parks, PanelKind::Whispers]);
        shell.enter_full_screen(PanelKind::Parks);
        shell.enter_full_screen(PanelKind::Whispers);

        assert_eq!(shell.fullscreen(), Some(PanelKind::Whispers));
        assert!(!shell.registry().is_full_screen(PanelKind::Parks));
        let flagged = shell
            .snapshot()
            .windows
            .iter()
            .filter(|w| w.is_full_screen)
            .count();
        assert_eq!(flagged, 1);
    }

    #[test]
    fn exit_for_non_holder_is_noop() {
        let mut shell = coordinator_with(&[PanelKind::Parks, PanelKind::Whispers]);
        shell.enter_full_screen(PanelKind::Parks);

        assert!(!shell.exit_full_screen(PanelKind::Whispers));
        assert_eq!(shell.fullscreen(), Some(PanelKind::Parks));
    }

    #[test]
    fn drag_is_blocked_while_fullscreen() {
        let mut shell = coordinator_with(&[PanelKind::DrawGuess]);
        shell.enter_full_screen(PanelKind::DrawGuess);

        assert!(!shell.begin_drag(PanelKind::DrawGuess, 1, Offset::ORIGIN));
        assert!(!shell.drag_to(PanelKind::DrawGuess, 1, Offset::new(30, 30)));
        let entry = shell.registry().entry(PanelKind::DrawGuess).unwrap();
        assert_eq!(entry.position(), Offset::ORIGIN);
        assert!(!entry.is_dragging());
    }

    #[test]
    fn entering_fullscreen_discards_active_drag() {
        let mut shell = coordinator_with(&[PanelKind::Parks]);
        shell.begin_drag(PanelKind::Parks, 3, Offset::ORIGIN);
        shell.drag_to(PanelKind::Parks, 3, Offset::new(12, 8));

        shell.enter_full_screen(PanelKind::Parks);
        assert!(!shell.registry().entry(PanelKind::Parks).unwrap().is_dragging());
        assert!(!shell.end_drag(PanelKind::Parks, 3));
    }

    #[test]
    fn snapshot_drag_pointer_clears_when_fullscreen_takes_over() {
        let mut shell = coordinator_with(&[PanelKind::Parks]);
        shell.begin_drag(PanelKind::Parks, 1, Offset::ORIGIN);
        assert_eq!(
            shell.snapshot().window(PanelKind::Parks).unwrap().drag_pointer,
            Some(1)
        );

        // Second finger toggles fullscreen twice while the first is still down.
        shell.apply(ShellEvent::ToggleFullScreen { id: PanelKind::Parks });
        shell.apply(ShellEvent::ToggleFullScreen { id: PanelKind::Parks });
        assert!(!shell.apply(ShellEvent::DragEnd {
            id: PanelKind::Parks,
            pointer_id: 1,
        }));

        let view = shell.snapshot().window(PanelKind::Parks).cloned().unwrap();
        assert_eq!(view.drag_pointer, None);
        assert!(shell.apply(ShellEvent::DragStart {
            id: PanelKind::Parks,
            pointer_id: 3,
            pointer: Offset::new(5, 5),
        }));
        assert_eq!(
            shell.snapshot().window(PanelKind::Parks).unwrap().drag_pointer,
            Some(3)
        );
    }

    #[test]
    fn exit_restores_previous_offset_when_configured() {
        let config = ShellConfig {
            fullscreen_exit: FullScreenExitPolicy::RestorePrevious,
            ..ShellConfig::default()
        };
        let mut shell = ShellCoordinator::new(&config);
        shell.open(PanelKind::Parks);
        shell.begin_drag(PanelKind::Parks, 1, Offset::ORIGIN);
        shell.drag_to(PanelKind::Parks, 1, Offset::new(-40, 25));
        shell.end_drag(PanelKind::Parks, 1);

        shell.toggle_full_screen(PanelKind::Parks);
        shell.toggle_full_screen(PanelKind::Parks);
        let entry = shell.registry().entry(PanelKind::Parks).unwrap();
        assert_eq!(entry.position(), Offset::new(-40, 25));
    }

    #[test]
    fn reduce_threads_owned_state() {
        let shell = ShellCoordinator::default()
            .reduce(ShellEvent::Open { id: PanelKind::Whispers })
            .reduce(ShellEvent::ToggleFullScreen { id: PanelKind::Whispers });

        assert_eq!(shell.fullscreen(), Some(PanelKind::Whispers));
    }

    #[test]
    fn events_use_tagged_json() {
        let event = ShellEvent::DragEnd {
            id: PanelKind::Parks,
            pointer_id: 2,
        };
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "drag_end", "id": "parks", "pointer_id": 2})
        );
        assert_eq!(event.target(), PanelKind::Parks);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn panel() -> impl Strategy<Value = PanelKind> {
        prop::sample::select(PanelKind::ALL.to_vec())
    }

    fn point() -> impl Strategy<Value = Offset> {
        (-2000i32..2000, -2000i32..2000).prop_map(|(x, y)| Offset::new(x, y))
    }

    fn event() -> impl Strategy<Value = ShellEvent> {
        prop_oneof![
            panel().prop_map(|id| ShellEvent::Open { id }),
            panel().prop_map(|id| ShellEvent::Close { id }),
            panel().prop_map(|id| ShellEvent::ToggleFullScreen { id }),
            panel().prop_map(|id| ShellEvent::EnterFullScreen { id }),
            panel().prop_map(|id| ShellEvent::ExitFullScreen { id }),
            (panel(), 0i32..3, point()).prop_map(|(id, pointer_id, pointer)| {
                ShellEvent::DragStart {
                    id,
                    pointer_id,
                    pointer,
                }
            }),
            (panel(), 0i32..3, point()).prop_map(|(id, pointer_id, pointer)| {
                ShellEvent::DragMove {
                    id,
                    pointer_id,
                    pointer,
                }
            }),
            (panel(), 0i32..3).prop_map(|(id, pointer_id)| ShellEvent::DragEnd { id, pointer_id }),
            (panel(), 0i32..3)
                .prop_map(|(id, pointer_id)| ShellEvent::DragCancel { id, pointer_id }),
        ]
    }

    proptest! {
        /// Shell-wide invariants hold after every event of any sequence
        #[test]
        fn invariants_hold_for_any_sequence(events in prop::collection::vec(event(), 0..64)) {
            let mut shell = ShellCoordinator::default();
            for event in events {
                shell.apply(event);

                let ids: Vec<_> = shell.registry().open_ids().collect();
                let mut deduped = ids.clone();
                deduped.sort();
                deduped.dedup();
                prop_assert_eq!(deduped.len(), ids.len(), "duplicate ids in {:?}", ids);

                let snapshot = shell.snapshot();
                let fullscreen_count = snapshot.windows.iter().filter(|w| w.is_full_screen).count();
                prop_assert!(fullscreen_count <= 1);
                prop_assert_eq!(snapshot.dock_visible, shell.fullscreen().is_none());
                prop_assert_eq!(fullscreen_count == 1, shell.fullscreen().is_some());

                if let Some(id) = shell.fullscreen() {
                    prop_assert!(shell.is_open(id));
                    let entry = shell.registry().entry(id).unwrap();
                    prop_assert!(!entry.is_dragging());
                }

                for window in &snapshot.windows {
                    prop_assert_eq!(window.is_dragging, window.drag_pointer.is_some());
                }

                for launcher in &snapshot.launchers {
                    prop_assert_eq!(launcher.active, shell.is_open(launcher.kind));
                }
            }
        }

        /// Closing always leaves the window closed
        #[test]
        fn close_then_query_is_false(
            events in prop::collection::vec(event(), 0..32),
            id in panel(),
        ) {
            let mut shell = ShellCoordinator::default();
            for event in events {
                shell.apply(event);
            }
            shell.close(id);
            prop_assert!(!shell.is_open(id));
            prop_assert_ne!(shell.fullscreen(), Some(id));
        }

        /// Opening twice equals opening once
        #[test]
        fn open_is_idempotent(
            events in prop::collection::vec(event(), 0..32),
            id in panel(),
        ) {
            let mut shell = ShellCoordinator::default();
            for event in events {
                shell.apply(event);
            }
            shell.open(id);
            let once = shell.clone();
            prop_assert!(!shell.open(id));
            prop_assert_eq!(shell, once);
        }
    }
}
