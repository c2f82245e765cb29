//! Standalone pages outside the desktop shell

mod games_page;
mod landing;

pub use games_page::GamesPage;
pub use landing::Landing;
