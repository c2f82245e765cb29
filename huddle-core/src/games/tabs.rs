//! Tabbed game picker used by the `/games` page

use serde::{Deserialize, Serialize};

use crate::panel::PanelKind;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTabs {
    active: Option<PanelKind>,
}

/// One navigation button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTab {
    pub kind: PanelKind,
    pub label: String,
    pub active: bool,
}

impl GameTabs {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` until a tab has been picked; the page shows a prompt instead.
    pub fn active(&self) -> Option<PanelKind> {
        self.active
    }

    /// Selecting the active tab again keeps it selected.
    pub fn select(&mut self, kind: PanelKind) -> bool {
        if self.active == Some(kind) {
            return false;
        }
        self.active = Some(kind);
        true
    }

    pub fn is_active(&self, kind: PanelKind) -> bool {
        self.active == Some(kind)
    }

    pub fn tabs(&self) -> Vec<GameTab> {
        PanelKind::ALL
            .into_iter()
            .map(|kind| GameTab {
                kind,
                label: kind.title().to_string(),
                active: self.is_active(kind),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nothing_selected() {
        let tabs = GameTabs::new();
        assert_eq!(tabs.active(), None);
        assert!(tabs.tabs().iter().all(|tab| !tab.active));
    }

    #[test]
    fn exactly_one_tab_is_active_after_select() {
        let mut tabs = GameTabs::new();
        assert!(tabs.select(PanelKind::DrawGuess));
        assert!(tabs.select(PanelKind::Whispers));

        let active: Vec<_> = tabs
            .tabs()
            .into_iter()
            .filter(|tab| tab.active)
            .map(|tab| tab.kind)
            .collect();
        assert_eq!(active, vec![PanelKind::Whispers]);
    }

    #[test]
    fn reselecting_is_a_noop() {
        let mut tabs = GameTabs::new();
        tabs.select(PanelKind::Parks);
        assert!(!tabs.select(PanelKind::Parks));
        assert!(tabs.is_active(PanelKind::Parks));
    }

    #[test]
    fn tabs_follow_dock_order_with_full_titles() {
        let labels: Vec<_> = GameTabs::new().tabs().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["多人配合版逛三园", "你猜我画", "传声筒"]);
    }
}
