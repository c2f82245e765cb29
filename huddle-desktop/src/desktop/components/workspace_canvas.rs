use dioxus::prelude::*;
use huddle_core::{ShellEvent, ShellSnapshot};

use crate::desktop::apps::desktop_shortcuts;
use crate::desktop::components::desktop_icons::DesktopIcons;
use crate::desktop_window::FloatingWindow;

#[component]
pub fn WorkspaceCanvas(snapshot: ShellSnapshot, on_event: Callback<ShellEvent>) -> Element {
    rsx! {
        div {
            class: "desktop-workspace",
            style: "position: relative; width: 100vw; height: 100dvh; overflow: hidden; background-color: #2e3440; background-image: radial-gradient(circle at center, #434c5e 0%, #2e3440 100%);",

            DesktopIcons { shortcuts: desktop_shortcuts() }

            div {
                class: "window-canvas",
                style: "position: absolute; inset: 0; pointer-events: none;",

                for window in snapshot.windows.iter() {
                    FloatingWindow {
                        key: "{window.id}",
                        window: window.clone(),
                        on_event,
                    }
                }
            }
        }
    }
}
