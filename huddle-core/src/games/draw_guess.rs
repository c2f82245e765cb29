//! Draw & Guess: hidden prompt words plus a round countdown

use crate::countdown::Countdown;
use crate::games::reveal::RevealList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawGuessBoard {
    pub words: RevealList,
    pub timer: Countdown,
}

impl DrawGuessBoard {
    pub fn new(words: Vec<String>, round_secs: u32) -> Self {
        Self {
            words: RevealList::new(words),
            timer: Countdown::new(round_secs),
        }
    }

    /// Words stay hidden in the list; tiles are numbered from 1.
    pub fn tile_label(index: usize) -> String {
        format!("词语 {}", index + 1)
    }

    pub fn tile_labels(&self) -> Vec<String> {
        (0..self.words.len()).map(Self::tile_label).collect()
    }
}
