//! Park theme carousel with wrap-around navigation

use serde::{Deserialize, Serialize};

use crate::catalog::ParkTheme;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkCarousel {
    parks: Vec<ParkTheme>,
    index: usize,
    rules_visible: bool,
}

impl ParkCarousel {
    pub fn new(parks: Vec<ParkTheme>) -> Self {
        Self {
            parks,
            index: 0,
            rules_visible: false,
        }
    }

    pub fn parks(&self) -> &[ParkTheme] {
        &self.parks
    }

    pub fn len(&self) -> usize {
        self.parks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parks.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&ParkTheme> {
        self.parks.get(self.index)
    }

    pub fn next(&mut self) {
        let n = self.parks.len();
        if n > 0 {
            self.index = (self.index + 1) % n;
        }
    }

    pub fn prev(&mut self) {
        let n = self.parks.len();
        if n > 0 {
            self.index = (self.index + n - 1) % n;
        }
    }

    /// Jump to `index`, clamped to the last park.
    pub fn select(&mut self, index: usize) {
        self.index = index.min(self.parks.len().saturating_sub(1));
    }

    /// Progress-dot state for `index`
    pub fn is_current(&self, index: usize) -> bool {
        !self.parks.is_empty() && index == self.index
    }

    pub fn rules_visible(&self) -> bool {
        self.rules_visible
    }

    pub fn show_rules(&mut self) {
        self.rules_visible = true;
    }

    pub fn hide_rules(&mut self) {
        self.rules_visible = false;
    }
}
