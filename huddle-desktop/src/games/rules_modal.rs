use dioxus::prelude::*;

/// Overlay dialog; clicking the backdrop or the close button dismisses it
#[component]
pub fn RulesModal(open: bool, title: String, on_close: Callback<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "rules-backdrop",
            style: "position: fixed; inset: 0; z-index: 60; background: rgba(0, 0, 0, 0.2); backdrop-filter: blur(2px);",
            onclick: move |_| on_close.call(()),
        }
        div {
            style: "position: fixed; inset: 0; z-index: 61; display: flex; align-items: center; justify-content: center; padding: 0 1rem; pointer-events: none;",
            div {
                class: "rules-modal",
                role: "dialog",
                style: "width: 100%; max-width: 28rem; background: white; border-radius: var(--radius-lg, 12px); box-shadow: var(--shadow-lg); overflow: hidden; pointer-events: auto;",

                div {
                    style: "display: flex; align-items: center; justify-content: space-between; padding: 1rem 1.5rem; border-bottom: 1px solid #f3f4f6;",
                    h2 { style: "margin: 0; font-size: 1.125rem; font-weight: 600; color: #1f2937;", "{title}" }
                    button {
                        "aria-label": "Close",
                        style: "width: 2rem; height: 2rem; border: none; border-radius: 999px; background: transparent; color: #6b7280; cursor: pointer; font-size: 1.25rem;",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div {
                    style: "padding: 1.25rem 1.5rem; max-height: 60vh; overflow-y: auto;",
                    {children}
                }
            }
        }
    }
}

/// Numbered rule lines
#[component]
pub fn RulesList(rules: Vec<String>) -> Element {
    rsx! {
        div {
            class: "rules-list",
            style: "display: flex; flex-direction: column; gap: 0.5rem; color: #4b5563;",
            for (index, rule) in rules.iter().enumerate() {
                p { key: "{index}", style: "margin: 0;", "{index + 1}. {rule}" }
            }
        }
    }
}
