use dioxus::prelude::*;
use huddle_core::games::{GameTab, GameTabs};
use huddle_core::PanelKind;

use crate::games::{DrawGuessView, ParksView, WhispersView};
use crate::routes::Route;

fn tab_button_style(active: bool) -> &'static str {
    if active {
        "padding: 0.5rem 1.25rem; border: none; border-radius: 999px; font-weight: 500; background: black; color: white; box-shadow: var(--shadow-sm); cursor: pointer;"
    } else {
        "padding: 0.5rem 1.25rem; border: none; border-radius: 999px; font-weight: 500; background: #f3f4f6; color: #1f2937; cursor: pointer;"
    }
}

#[component]
pub fn GamesPage() -> Element {
    let mut tabs = use_signal(GameTabs::new);
    let state = tabs.read().clone();

    rsx! {
        main {
            class: "games-page",
            style: "height: 100dvh; overflow-y: auto; display: flex; flex-direction: column; background: white; font-family: -apple-system, BlinkMacSystemFont, 'PingFang SC', 'Microsoft YaHei', sans-serif;",

            nav {
                style: "padding: 1rem 1.5rem; border-bottom: 1px solid #f3f4f6; background: white;",
                div {
                    style: "max-width: 80rem; margin: 0 auto; display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 1rem;",
                    Link {
                        to: Route::Landing {},
                        style: "font-size: 1.25rem; font-weight: 700; color: #1f2937; text-decoration: none;",
                        "← 返回首页"
                    }
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 0.75rem;",
                        for tab in state.tabs() {
                            GameButton {
                                key: "{tab.kind}",
                                tab: tab.clone(),
                                on_select: move |kind: PanelKind| {
                                    tabs.write().select(kind);
                                },
                            }
                        }
                    }
                }
            }

            div {
                style: "flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 2rem; background: #f9fafb;",
                div {
                    key: "{active_key(state.active())}",
                    style: "width: 100%; max-width: 72rem; padding: 2rem; border-radius: var(--radius-lg, 12px); background: white; box-shadow: var(--shadow-sm);",

                    match state.active() {
                        Some(PanelKind::Parks) => rsx! { ParksView {} },
                        Some(PanelKind::DrawGuess) => rsx! { DrawGuessView {} },
                        Some(PanelKind::Whispers) => rsx! { WhispersView {} },
                        None => rsx! {
                            div {
                                style: "padding: 2rem; text-align: center;",
                                h2 { style: "margin: 0 0 1.5rem; font-size: 1.875rem; font-weight: 700; color: #1f2937;", "请选择一个游戏开始" }
                                p { style: "margin: 0; font-size: 1.25rem; color: #4b5563;", "点击上方的游戏按钮开始团队活动" }
                            }
                        },
                    }
                }
            }

            footer {
                style: "padding: 1rem 2rem; border-top: 1px solid #f3f4f6; background: white; text-align: center; font-size: 0.875rem; color: #6b7280;",
                p { style: "margin: 0;", "© 2023 团建活动展示系统" }
            }
        }
    }
}

fn active_key(active: Option<PanelKind>) -> &'static str {
    active.map_or("default", PanelKind::id)
}

#[component]
fn GameButton(tab: GameTab, on_select: Callback<PanelKind>) -> Element {
    let kind = tab.kind;

    rsx! {
        button {
            class: "game-tab",
            style: tab_button_style(tab.active),
            onclick: move |_| on_select.call(kind),
            "{tab.label}"
        }
    }
}
