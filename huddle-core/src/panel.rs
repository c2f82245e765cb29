//! Panel kinds hosted by desktop windows
//!
//! Each window hosts exactly one fixed content panel, so the panel kind doubles
//! as the window identifier: at most one window per kind can be open.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of content panels the shell knows how to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PanelKind {
    /// Word-association "逛三园" carousel
    Parks,
    /// Draw-and-guess prompt board with countdown
    DrawGuess,
    /// Chinese-whispers phrase revealer
    Whispers,
}

impl PanelKind {
    /// All panels in dock order.
    pub const ALL: [PanelKind; 3] = [PanelKind::Parks, PanelKind::DrawGuess, PanelKind::Whispers];

    /// Stable string id, matching the serde representation.
    pub fn id(self) -> &'static str {
        match self {
            PanelKind::Parks => "parks",
            PanelKind::DrawGuess => "drawGuess",
            PanelKind::Whispers => "whispers",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PanelKind::Parks => "多人配合版逛三园",
            PanelKind::DrawGuess => "你猜我画",
            PanelKind::Whispers => "传声筒",
        }
    }

    /// Short label shown in the dock tooltip
    pub fn dock_label(self) -> &'static str {
        match self {
            PanelKind::Parks => "逛三园",
            PanelKind::DrawGuess => "你猜我画",
            PanelKind::Whispers => "传声筒",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PanelKind::Parks => "🏞️",
            PanelKind::DrawGuess => "🎨",
            PanelKind::Whispers => "🔊",
        }
    }

    /// CSS colour used for the dock tile.
    pub fn accent(self) -> &'static str {
        match self {
            PanelKind::Parks => "#eab308",
            PanelKind::DrawGuess => "#ec4899",
            PanelKind::Whispers => "#22c55e",
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("Unknown panel: {0}")]
pub struct ParsePanelError(pub String);

impl FromStr for PanelKind {
    type Err = ParsePanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanelKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| ParsePanelError(s.to_string()))
    }
}
