use dioxus::prelude::*;
use huddle_core::{LauncherView, PanelKind};

#[component]
pub fn Dock(launchers: Vec<LauncherView>, on_open: Callback<PanelKind>) -> Element {
    let mut hovered = use_signal(|| None::<PanelKind>);

    rsx! {
        div {
            class: "dock",
            style: "position: fixed; bottom: 1.5rem; left: 50%; transform: translateX(-50%); z-index: 40; display: flex; justify-content: center;",

            div {
                style: "display: flex; align-items: flex-end; gap: 1rem; padding: 0.75rem 1.5rem; border-radius: 999px; background: var(--dock-bg); border: 1px solid rgba(255, 255, 255, 0.3); backdrop-filter: blur(16px); box-shadow: var(--shadow-lg);",

                for launcher in launchers {
                    {
                        let kind = launcher.kind;
                        let accent = kind.accent();
                        let ring = if launcher.active {
                            "0 0 0 2px rgba(255,255,255,0.5), 0 8px 16px rgba(0,0,0,0.1)"
                        } else {
                            "0 4px 8px rgba(0,0,0,0.1)"
                        };
                        rsx! {
                            div {
                                key: "{kind}",
                                style: "display: flex; flex-direction: column; align-items: center;",

                                if hovered() == Some(kind) {
                                    div {
                                        class: "dock-tooltip",
                                        style: "margin-bottom: 0.5rem; padding: 0.25rem 0.75rem; background: #1f2937; color: white; font-size: 0.875rem; border-radius: var(--radius-md, 8px); white-space: nowrap;",
                                        "{launcher.label}"
                                    }
                                }

                                button {
                                    class: "dock-icon",
                                    "aria-label": "{launcher.label}",
                                    style: "position: relative; width: 3.5rem; height: 3.5rem; display: flex; align-items: center; justify-content: center; border: none; border-radius: 1rem; cursor: pointer; background: {accent}; box-shadow: {ring};",
                                    onmouseenter: move |_| hovered.set(Some(kind)),
                                    onmouseleave: move |_| hovered.set(None),
                                    onclick: move |_| on_open.call(kind),

                                    span { style: "font-size: 1.875rem; pointer-events: none;", "{launcher.icon}" }
                                    if launcher.active {
                                        div {
                                            class: "dock-active-dot",
                                            style: "position: absolute; bottom: -0.5rem; width: 0.375rem; height: 0.375rem; border-radius: 999px; background: white;",
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
