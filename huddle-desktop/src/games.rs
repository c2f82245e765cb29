//! Content views hosted by the desktop windows

mod draw_guess;
mod parks;
mod rules_modal;
mod whispers;

pub use draw_guess::DrawGuessView;
pub use parks::ParksView;
pub use rules_modal::{RulesList, RulesModal};
pub use whispers::WhispersView;
