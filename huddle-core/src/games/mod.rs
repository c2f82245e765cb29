//! Per-panel game state
//!
//! Each view owns one of these; none of them touch the window session.
//! `GameTabs` backs the standalone `/games` page.

pub mod draw_guess;
pub mod parks;
pub mod reveal;
pub mod tabs;
pub mod whispers;

pub use draw_guess::DrawGuessBoard;
pub use parks::ParkCarousel;
pub use reveal::RevealList;
pub use tabs::{GameTab, GameTabs};
pub use whispers::{Difficulty, WhispersBoard};
