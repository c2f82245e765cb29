//! Render-facing view of the shell state

use serde::{Deserialize, Serialize};

use crate::geometry::Offset;
use crate::panel::PanelKind;

/// Derived state handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellSnapshot {
    /// Open windows, render order (last is on top)
    pub windows: Vec<WindowView>,
    pub fullscreen: Option<PanelKind>,
    /// False while any window is fullscreen
    pub dock_visible: bool,
    /// One per panel kind, dock order
    pub launchers: Vec<LauncherView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowView {
    pub id: PanelKind,
    pub title: String,
    pub position: Offset,
    pub is_full_screen: bool,
    pub is_dragging: bool,
    /// Pointer that owns the active title-bar drag
    pub drag_pointer: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherView {
    pub kind: PanelKind,
    pub label: String,
    pub icon: String,
    /// Shows the active-indicator dot
    pub active: bool,
}

impl ShellSnapshot {
    pub fn window(&self, id: PanelKind) -> Option<&WindowView> {
        self.windows.iter().find(|window| window.id == id)
    }
}
