use dioxus::prelude::*;
use huddle_core::games::{Difficulty, WhispersBoard};
use huddle_core::{GameCatalog, PanelKind};

use crate::games::rules_modal::RulesList;

const SECTION_STYLE: &str = "padding: 1.5rem; border-radius: var(--radius-md, 8px); background: #f9fafb; border: 1px solid #f3f4f6;";

fn difficulty_button_style(selected: bool) -> &'static str {
    if selected {
        "padding: 0.5rem 1.25rem; border: none; border-radius: 999px; font-weight: 500; background: black; color: white; cursor: pointer;"
    } else {
        "padding: 0.5rem 1.25rem; border: 1px solid #e5e7eb; border-radius: 999px; font-weight: 500; background: white; color: #374151; cursor: pointer;"
    }
}

#[component]
pub fn WhispersView() -> Element {
    let catalog = use_context::<GameCatalog>();
    let rules = catalog.rules_for(PanelKind::Whispers).to_vec();
    let mut board = use_signal(|| WhispersBoard::new(catalog.whisper_sentences.clone()));

    let state = board.read().clone();
    let title = PanelKind::Whispers.title();
    let font_rem = state.difficulty.font_rem();

    rsx! {
        div {
            class: "whispers-game",
            style: "display: flex; flex-direction: column; gap: 2rem; padding: 1.5rem;",

            div {
                style: "text-align: center;",
                h1 { style: "margin: 0 0 1rem; font-size: 2.5rem; font-weight: 700; color: #1f2937;", "{title}" }
                div { style: "height: 0.25rem; width: 8rem; margin: 0 auto; border-radius: 999px; background: #4ade80;" }
            }

            div {
                style: SECTION_STYLE,
                h2 { style: "margin: 0 0 0.75rem; font-size: 1.5rem; font-weight: 700; color: #1f2937;", "游戏规则" }
                RulesList { rules }
            }

            div {
                class: "difficulty",
                style: "{SECTION_STYLE} display: flex; flex-wrap: wrap; align-items: center; justify-content: center; gap: 1rem;",
                span { style: "font-size: 1.125rem; font-weight: 500; color: #374151;", "难度：" }
                div {
                    style: "display: flex; gap: 0.5rem;",
                    for level in Difficulty::ALL {
                        button {
                            key: "{level.label()}",
                            style: difficulty_button_style(state.difficulty == level),
                            onclick: move |_| board.write().set_difficulty(level),
                            "{level.label()}"
                        }
                    }
                }
            }

            div {
                style: SECTION_STYLE,
                h3 { style: "margin: 0 0 1.5rem; font-size: 1.25rem; font-weight: 700; color: #1f2937;", "选择句子" }

                if let Some(sentence) = state.sentences.revealed() {
                    div {
                        style: "display: flex; flex-direction: column; align-items: center;",
                        div {
                            key: "{sentence}",
                            class: "revealed-sentence",
                            style: "max-width: 42rem; margin-bottom: 1.5rem; padding: 1.5rem 2rem; border-radius: var(--radius-md, 8px); background: white; border: 1px solid #bbf7d0; box-shadow: var(--shadow-sm); text-align: center;",
                            span { style: "font-size: {font_rem}rem; font-weight: 700; color: #1f2937;", "{sentence}" }
                        }
                        button {
                            style: "padding: 0.5rem 1.5rem; border: none; border-radius: 999px; font-weight: 500; background: #e5e7eb; color: #1f2937; cursor: pointer;",
                            onclick: move |_| board.write().sentences.hide(),
                            "返回列表"
                        }
                    }
                } else {
                    div {
                        style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 0.75rem;",
                        for (index, preview) in state.previews().into_iter().enumerate() {
                            div {
                                key: "{index}",
                                class: "sentence-tile",
                                style: "display: flex; align-items: center; padding: 0.75rem; border-radius: var(--radius-md, 8px); background: white; border: 1px solid #f3f4f6; cursor: pointer;",
                                onclick: move |_| {
                                    board.write().sentences.reveal(index);
                                },
                                div {
                                    style: "width: 2rem; height: 2rem; margin-right: 0.75rem; flex-shrink: 0; display: flex; align-items: center; justify-content: center; border-radius: 999px; background: #f3f4f6;",
                                    span { style: "font-weight: 700; color: #374151;", "{index + 1}" }
                                }
                                span { style: "font-size: 1.125rem; font-weight: 500; color: #374151; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;", "{preview}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_level_is_highlighted() {
        assert!(difficulty_button_style(true).contains("background: black"));
        assert!(difficulty_button_style(false).contains("background: white"));
    }
}
