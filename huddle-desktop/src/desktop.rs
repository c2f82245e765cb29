//! Desktop shell: boot screen, menu bar, window canvas and dock

use dioxus::prelude::*;

mod apps;
mod components;
mod effects;
mod shell;
pub mod state;

pub use shell::DesktopShell;

#[component]
pub fn Desktop() -> Element {
    rsx! {
        DesktopShell {}
    }
}
