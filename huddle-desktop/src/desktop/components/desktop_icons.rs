use dioxus::prelude::*;

use crate::desktop::apps::DesktopShortcut;

#[component]
pub fn DesktopIcons(shortcuts: Vec<DesktopShortcut>) -> Element {
    rsx! {
        div {
            class: "desktop-icons",
            style: "position: absolute; top: 4rem; left: 1.5rem; z-index: 1; display: grid; grid-template-columns: 6rem; gap: 1rem;",

            for shortcut in shortcuts {
                DesktopIcon { key: "{shortcut.name}", shortcut: shortcut.clone() }
            }
        }
    }
}

#[component]
fn DesktopIcon(shortcut: DesktopShortcut) -> Element {
    rsx! {
        div {
            class: "desktop-icon",
            style: "display: flex; flex-direction: column; align-items: center; width: 6rem; cursor: pointer;",
            span { style: "font-size: 1.875rem; margin-bottom: 0.25rem; pointer-events: none;", "{shortcut.icon}" }
            span {
                class: "desktop-icon-label",
                style: "color: white; font-size: 0.875rem; font-weight: 500; padding: 0.25rem 0.5rem; border-radius: var(--radius-sm, 4px); text-align: center; background: rgba(31, 41, 55, 0.3); backdrop-filter: blur(4px); user-select: none;",
                "{shortcut.name}"
            }
        }
    }
}
