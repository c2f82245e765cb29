//! Chinese whispers: phrase list with a difficulty-driven display size

use serde::{Deserialize, Serialize};

use crate::games::reveal::RevealList;

const PREVIEW_CHARS: usize = 20;

/// Harder levels show the phrase smaller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "简单",
            Difficulty::Medium => "中等",
            Difficulty::Hard => "困难",
        }
    }

    /// Revealed phrase font size in rem
    pub fn font_rem(self) -> f32 {
        match self {
            Difficulty::Easy => 2.25,
            Difficulty::Medium => 1.875,
            Difficulty::Hard => 1.5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhispersBoard {
    pub sentences: RevealList,
    pub difficulty: Difficulty,
}

impl WhispersBoard {
    pub fn new(sentences: Vec<String>) -> Self {
        Self {
            sentences: RevealList::new(sentences),
            difficulty: Difficulty::default(),
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn previews(&self) -> Vec<String> {
        self.sentences.items().iter().map(|s| preview(s)).collect()
    }
}

/// First twenty characters followed by "..." when the phrase is longer.
pub fn preview(sentence: &str) -> String {
    match sentence.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &sentence[..cut]),
        None => sentence.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_sentence_is_untouched() {
        assert_eq!(preview("南京市长江大桥非常雄伟壮观"), "南京市长江大桥非常雄伟壮观");
    }

    #[test]
    fn exactly_twenty_chars_is_untouched() {
        let s = "一二三四五六七八九十一二三四五六七八九十";
        assert_eq!(s.chars().count(), 20);
        assert_eq!(preview(s), s);
    }

    #[test]
    fn long_sentence_cuts_on_char_boundary() {
        let s = "小驼峰和大驼峰命名法是编程中常用的变量命名方式";
        assert_eq!(preview(s), "小驼峰和大驼峰命名法是编程中常用的变量命...");
    }

    #[test]
    fn medium_is_default() {
        let mut board = WhispersBoard::new(vec!["你好".into()]);
        assert_eq!(board.difficulty, Difficulty::Medium);
        board.set_difficulty(Difficulty::Hard);
        assert!(Difficulty::Hard.font_rem() < Difficulty::Easy.font_rem());
        assert_eq!(board.difficulty.label(), "困难");
        assert_eq!(board.previews(), vec!["你好"]);
    }
}
