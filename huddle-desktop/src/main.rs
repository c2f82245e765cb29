use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use huddle_core::{load_catalog, load_shell_config};
use huddle_desktop::Route;

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    // Settings and game content are shared by every route
    use_context_provider(load_shell_config);
    use_context_provider(load_catalog);

    rsx! {
        Router::<Route> {}
    }
}
