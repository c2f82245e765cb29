use dioxus::prelude::*;
use huddle_core::games::ParkCarousel;
use huddle_core::{GameCatalog, PanelKind};

use crate::games::rules_modal::{RulesList, RulesModal};

const NAV_BUTTON_STYLE: &str = "width: 2.5rem; height: 2.5rem; display: flex; align-items: center; justify-content: center; border: none; border-radius: 999px; background: white; color: #6b7280; box-shadow: var(--shadow-sm); cursor: pointer; font-size: 1.25rem;";

#[component]
pub fn ParksView() -> Element {
    let catalog = use_context::<GameCatalog>();
    let rules = catalog.rules_for(PanelKind::Parks).to_vec();
    let mut carousel = use_signal(|| ParkCarousel::new(catalog.parks.clone()));

    let title = PanelKind::Parks.title();
    let state = carousel.read().clone();
    let current = state.current().cloned();

    rsx! {
        div {
            class: "parks-game",
            style: "display: flex; flex-direction: column; height: 100%; padding: 1.25rem; box-sizing: border-box;",

            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 1rem;",
                h1 { style: "margin: 0; font-size: 1.25rem; font-weight: 600; color: #1f2937;", "{title}" }
                button {
                    style: "padding: 0.25rem 0.75rem; font-size: 0.75rem; font-weight: 500; border: none; border-radius: 999px; background: #f2f2f7; color: #4b5563; cursor: pointer;",
                    onclick: move |_| carousel.write().show_rules(),
                    "查看规则"
                }
            }

            RulesModal {
                open: state.rules_visible(),
                title: "游戏规则".to_string(),
                on_close: move |_| carousel.write().hide_rules(),
                RulesList { rules }
            }

            div {
                style: "flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: center;",

                div {
                    style: "display: flex; align-items: center; justify-content: space-between; width: 100%; max-width: 28rem; padding: 1.5rem 1rem; margin-bottom: 1rem; border-radius: var(--radius-md, 8px); background: #f2f2f7;",
                    button {
                        "aria-label": "Previous park",
                        style: NAV_BUTTON_STYLE,
                        onclick: move |_| carousel.write().prev(),
                        "‹"
                    }
                    if let Some(park) = current {
                        div {
                            key: "{park.name}",
                            class: "park-card",
                            style: "text-align: center;",
                            div { style: "font-size: 3.75rem; margin-bottom: 1rem;", "{park.icon}" }
                            h2 { style: "margin: 0; font-size: 1.5rem; font-weight: 700; color: #1f2937;", "{park.name}" }
                        }
                    }
                    button {
                        "aria-label": "Next park",
                        style: NAV_BUTTON_STYLE,
                        onclick: move |_| carousel.write().next(),
                        "›"
                    }
                }

                div {
                    class: "park-progress",
                    style: "display: flex; gap: 0.5rem; margin-top: 1rem;",
                    for index in 0..state.len() {
                        div {
                            key: "{index}",
                            style: if state.is_current(index) {
                                "width: 0.5rem; height: 0.5rem; border-radius: 999px; background: #1f2937;"
                            } else {
                                "width: 0.5rem; height: 0.5rem; border-radius: 999px; background: #d1d5db;"
                            },
                        }
                    }
                }
            }
        }
    }
}
