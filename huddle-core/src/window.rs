//! Per-window transient state: position offset and title-bar drag
//!
//! Fullscreen is not stored here. The registry owns the single fullscreen
//! slot, and the entry only keeps the windowed position it should return to.

use serde::{Deserialize, Serialize};

use crate::config::FullScreenExitPolicy;
use crate::geometry::Offset;
use crate::panel::PanelKind;

/// An in-progress title-bar drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSession {
    /// Pointer that started the drag; events from other pointers are ignored
    pub pointer_id: i32,
    /// Pointer position (client space) at pointer-down
    pub pointer_start: Offset,
    /// Window offset at pointer-down
    pub position_start: Offset,
}

impl DragSession {
    /// Window offset for the given pointer position.
    pub fn position_for(&self, pointer: Offset) -> Offset {
        self.position_start + (pointer - self.pointer_start)
    }
}

/// One open window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowEntry {
    id: PanelKind,
    position: Offset,
    drag: Option<DragSession>,
    /// Windowed position captured on fullscreen-enter
    windowed_position: Option<Offset>,
}

impl WindowEntry {
    pub fn new(id: PanelKind, anchor: Offset) -> Self {
        Self {
            id,
            position: anchor,
            drag: None,
            windowed_position: None,
        }
    }

    pub fn id(&self) -> PanelKind {
        self.id
    }

    /// Offset from the default anchor while windowed.
    pub fn position(&self) -> Offset {
        self.position
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub(crate) fn begin_drag(&mut self, pointer_id: i32, pointer: Offset) -> bool {
        if self.drag.is_some() {
            return false;
        }
        self.drag = Some(DragSession {
            pointer_id,
            pointer_start: pointer,
            position_start: self.position,
        });
        true
    }

    pub(crate) fn drag_to(&mut self, pointer_id: i32, pointer: Offset) -> bool {
        let Some(session) = self.drag.filter(|s| s.pointer_id == pointer_id) else {
            return false;
        };
        let next = session.position_for(pointer);
        if next == self.position {
            return false;
        }
        self.position = next;
        true
    }

    /// Commit the current offset and end the drag.
    pub(crate) fn end_drag(&mut self, pointer_id: i32) -> bool {
        match self.drag {
            Some(session) if session.pointer_id == pointer_id => {
                self.drag = None;
                true
            }
            _ => false,
        }
    }

    /// Revert to the offset captured at drag start.
    pub(crate) fn cancel_drag(&mut self, pointer_id: i32) -> bool {
        match self.drag {
            Some(session) if session.pointer_id == pointer_id => {
                self.position = session.position_start;
                self.drag = None;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn enter_full_screen(&mut self) {
        // A drag cannot survive the switch to the fixed viewport frame.
        self.drag = None;
        self.windowed_position = Some(self.position);
    }

    pub(crate) fn exit_full_screen(&mut self, policy: FullScreenExitPolicy, anchor: Offset) {
        let saved = self.windowed_position.take();
        self.position = match policy {
            FullScreenExitPolicy::ResetToAnchor => anchor,
            FullScreenExitPolicy::RestorePrevious => saved.unwrap_or(anchor),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> WindowEntry {
        WindowEntry::new(PanelKind::Parks, Offset::ORIGIN)
    }

    #[test]
    fn drag_follows_pointer_delta() {
        let mut window = entry();
        assert!(window.begin_drag(1, Offset::new(500, 40)));
        assert!(window.drag_to(1, Offset::new(530, 60)));
        assert_eq!(window.position(), Offset::new(30, 20));

        assert!(window.drag_to(1, Offset::new(480, 10)));
        assert_eq!(window.position(), Offset::new(-20, -30));

        assert!(window.end_drag(1));
        assert!(!window.is_dragging());
        assert_eq!(window.position(), Offset::new(-20, -30));
    }

    #[test]
    fn second_drag_starts_from_committed_offset() {
        let mut window = entry();
        window.begin_drag(1, Offset::new(0, 0));
        window.drag_to(1, Offset::new(100, 0));
        window.end_drag(1);

        window.begin_drag(2, Offset::new(10, 10));
        window.drag_to(2, Offset::new(20, 30));
        assert_eq!(window.position(), Offset::new(110, 20));
    }

    #[test]
    fn foreign_pointer_is_ignored() {
        let mut window = entry();
        window.begin_drag(7, Offset::new(0, 0));

        assert!(!window.begin_drag(8, Offset::new(5, 5)));
        assert!(!window.drag_to(8, Offset::new(50, 50)));
        assert!(!window.end_drag(8));
        assert_eq!(window.position(), Offset::ORIGIN);
        assert_eq!(window.drag().map(|d| d.pointer_id), Some(7));
    }

    #[test]
    fn cancel_reverts_to_drag_start() {
        let mut window = WindowEntry::new(PanelKind::Whispers, Offset::new(15, 15));
        window.begin_drag(1, Offset::new(0, 0));
        window.drag_to(1, Offset::new(200, 100));
        assert!(window.cancel_drag(1));
        assert_eq!(window.position(), Offset::new(15, 15));
        assert!(!window.is_dragging());
    }

    #[test]
    fn fullscreen_round_trip_respects_policy() {
        let mut window = entry();
        window.begin_drag(1, Offset::ORIGIN);
        window.drag_to(1, Offset::new(40, 40));

        window.enter_full_screen();
        assert!(!window.is_dragging());
        window.exit_full_screen(FullScreenExitPolicy::ResetToAnchor, Offset::ORIGIN);
        assert_eq!(window.position(), Offset::ORIGIN);

        window.begin_drag(1, Offset::ORIGIN);
        window.drag_to(1, Offset::new(40, 40));
        window.end_drag(1);
        window.enter_full_screen();
        window.exit_full_screen(FullScreenExitPolicy::RestorePrevious, Offset::ORIGIN);
        assert_eq!(window.position(), Offset::new(40, 40));
    }
}
