use serde::{Deserialize, Serialize};

/// A list of hidden items with at most one revealed at a time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealList {
    items: Vec<String>,
    revealed: Option<usize>,
}

impl RevealList {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            revealed: None,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Show item `index`. Out-of-range indices change nothing.
    pub fn reveal(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.revealed = Some(index);
        true
    }

    /// Back to the list view.
    pub fn hide(&mut self) {
        self.revealed = None;
    }

    pub fn revealed_index(&self) -> Option<usize> {
        self.revealed
    }

    pub fn revealed(&self) -> Option<&str> {
        self.revealed
            .and_then(|index| self.items.get(index))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> RevealList {
        RevealList::new(vec!["篮球".into(), "雨伞".into()])
    }

    #[test]
    fn reveal_and_hide() {
        let mut words = list();
        assert_eq!(words.revealed(), None);

        assert!(words.reveal(1));
        assert_eq!(words.revealed(), Some("雨伞"));
        assert_eq!(words.revealed_index(), Some(1));

        words.hide();
        assert_eq!(words.revealed(), None);
    }

    #[test]
    fn out_of_range_reveal_is_ignored() {
        let mut words = list();
        words.reveal(0);
        assert!(!words.reveal(2));
        assert_eq!(words.revealed(), Some("篮球"));
    }
}
