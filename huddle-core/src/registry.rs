//! WindowRegistry - ordered set of open windows plus the fullscreen slot
//!
//! Insertion order is render order (last opened on top). The fullscreen slot
//! is the only record of which window is fullscreen; per-window flags are
//! derived from it, which keeps "at most one fullscreen window" true by
//! construction.

use crate::geometry::Offset;
use crate::panel::PanelKind;
use crate::window::WindowEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowRegistry {
    entries: Vec<WindowEntry>,
    fullscreen: Option<PanelKind>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a window for `id` at `anchor`.
    ///
    /// Returns `false` (and changes nothing) if the window is already open.
    pub fn open(&mut self, id: PanelKind, anchor: Offset) -> bool {
        if self.is_open(id) {
            return false;
        }
        self.entries.push(WindowEntry::new(id, anchor));
        tracing::debug!(panel = %id, open = self.entries.len(), "window opened");
        true
    }

    /// Close the window for `id`, clearing the fullscreen slot if it held it.
    ///
    /// Returns `false` if the window was not open.
    pub fn close(&mut self, id: PanelKind) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id() != id);
        if self.entries.len() == before {
            return false;
        }
        if self.fullscreen == Some(id) {
            self.fullscreen = None;
        }
        tracing::debug!(panel = %id, open = self.entries.len(), "window closed");
        true
    }

    pub fn is_open(&self, id: PanelKind) -> bool {
        self.entries.iter().any(|entry| entry.id() == id)
    }

    /// Open windows in insertion order.
    pub fn entries(&self) -> &[WindowEntry] {
        &self.entries
    }

    pub fn entry(&self, id: PanelKind) -> Option<&WindowEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub(crate) fn entry_mut(&mut self, id: PanelKind) -> Option<&mut WindowEntry> {
        self.entries.iter_mut().find(|entry| entry.id() == id)
    }

    pub fn open_ids(&self) -> impl Iterator<Item = PanelKind> + '_ {
        self.entries.iter().map(WindowEntry::id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The window currently occupying the full viewport, if any.
    pub fn fullscreen(&self) -> Option<PanelKind> {
        self.fullscreen
    }

    pub fn is_full_screen(&self, id: PanelKind) -> bool {
        self.fullscreen == Some(id)
    }

    pub(crate) fn set_fullscreen(&mut self, slot: Option<PanelKind>) {
        debug_assert!(slot.map_or(true, |id| self.is_open(id)));
        self.fullscreen = slot;
    }
}
