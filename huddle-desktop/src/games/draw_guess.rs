use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use gloo_timers::future::TimeoutFuture;
use huddle_core::games::DrawGuessBoard;
use huddle_core::{GameCatalog, PanelKind, ShellConfig, TickOutcome};

use crate::games::rules_modal::RulesList;

const TICK_MS: u32 = 1000;
const SECTION_STYLE: &str = "padding: 1.5rem; border-radius: var(--radius-md, 8px); background: #f9fafb; border: 1px solid #f3f4f6;";

/// Whether a ticker spawned at `started_epoch` may keep ticking.
///
/// Only the ticker from the latest start survives, and only while the view
/// is alive and the countdown is running.
fn ticker_should_continue(alive: bool, epoch: u64, started_epoch: u64, running: bool) -> bool {
    alive && epoch == started_epoch && running
}

/// One-second ticker for a single start of the countdown.
async fn run_countdown(
    mut board: Signal<DrawGuessBoard>,
    epoch: Signal<u64>,
    started_epoch: u64,
    alive: Rc<Cell<bool>>,
) {
    loop {
        TimeoutFuture::new(TICK_MS).await;
        let running = board.peek().timer.is_running();
        if !ticker_should_continue(alive.get(), *epoch.peek(), started_epoch, running) {
            return;
        }
        match board.write().timer.tick() {
            TickOutcome::Ticked => {}
            TickOutcome::Finished => {
                info!("draw & guess round finished");
                return;
            }
            TickOutcome::Idle => return,
        }
    }
}

fn timer_button_style(enabled: bool, active_bg: &str) -> String {
    if enabled {
        format!(
            "padding: 0.5rem 1.25rem; border: none; border-radius: 999px; font-weight: 500; \
             background: {active_bg}; color: white; cursor: pointer;"
        )
    } else {
        "padding: 0.5rem 1.25rem; border: none; border-radius: 999px; font-weight: 500; \
         background: #e5e7eb; color: #9ca3af; cursor: not-allowed;"
            .to_string()
    }
}

#[component]
pub fn DrawGuessView() -> Element {
    let catalog = use_context::<GameCatalog>();
    let config = use_context::<ShellConfig>();
    let rules = catalog.rules_for(PanelKind::DrawGuess).to_vec();
    let mut board =
        use_signal(|| DrawGuessBoard::new(catalog.draw_words.clone(), config.countdown_secs));
    let mut timer_epoch = use_signal(|| 0u64);
    let ticker_alive = use_hook(|| Rc::new(Cell::new(true)));

    {
        let ticker_alive = ticker_alive.clone();
        use_drop(move || {
            ticker_alive.set(false);
        });
    }

    let start_timer = move |_| {
        if !board.peek().timer.can_start() {
            return;
        }
        board.write().timer.start();
        let started_epoch = *timer_epoch.peek() + 1;
        timer_epoch.set(started_epoch);
        spawn(run_countdown(
            board,
            timer_epoch,
            started_epoch,
            ticker_alive.clone(),
        ));
    };

    let state = board.read().clone();
    let title = PanelKind::DrawGuess.title();
    let remaining = state.timer.remaining_secs();
    let start_style = timer_button_style(state.timer.can_start(), "#22c55e");
    let pause_style = timer_button_style(state.timer.can_pause(), "#ef4444");

    rsx! {
        div {
            class: "draw-guess-game",
            style: "display: flex; flex-direction: column; gap: 2rem; padding: 1.5rem;",

            div {
                style: "text-align: center;",
                h1 { style: "margin: 0 0 1rem; font-size: 2.5rem; font-weight: 700; color: #1f2937;", "{title}" }
                div { style: "height: 0.25rem; width: 8rem; margin: 0 auto; border-radius: 999px; background: #f472b6;" }
            }

            div {
                style: SECTION_STYLE,
                h2 { style: "margin: 0 0 0.75rem; font-size: 1.5rem; font-weight: 700; color: #1f2937;", "游戏规则" }
                RulesList { rules }
            }

            div {
                class: "countdown",
                style: "{SECTION_STYLE} display: flex; flex-direction: column; align-items: center;",
                div {
                    style: "margin-bottom: 1.5rem; font-size: 1.875rem; font-weight: 700; color: #1f2937;",
                    "{remaining} "
                    span { style: "font-size: 1.25rem; font-weight: 500; color: #6b7280;", "秒" }
                }
                div {
                    style: "display: flex; flex-wrap: wrap; justify-content: center; gap: 0.75rem;",
                    button {
                        style: "{start_style}",
                        disabled: !state.timer.can_start(),
                        onclick: start_timer,
                        "开始"
                    }
                    button {
                        style: "{pause_style}",
                        disabled: !state.timer.can_pause(),
                        onclick: move |_| board.write().timer.pause(),
                        "暂停"
                    }
                    button {
                        style: "padding: 0.5rem 1.25rem; border: none; border-radius: 999px; font-weight: 500; background: #e5e7eb; color: #1f2937; cursor: pointer;",
                        onclick: move |_| board.write().timer.reset(),
                        "重置"
                    }
                }
            }

            div {
                style: SECTION_STYLE,
                h3 { style: "margin: 0 0 1.5rem; font-size: 1.25rem; font-weight: 700; color: #1f2937;", "选择词语" }

                if let Some(word) = state.words.revealed() {
                    div {
                        style: "display: flex; flex-direction: column; align-items: center;",
                        div {
                            key: "{word}",
                            class: "revealed-word",
                            style: "margin-bottom: 1.5rem; padding: 2rem 3rem; border-radius: var(--radius-md, 8px); background: white; border: 1px solid #fbcfe8; box-shadow: var(--shadow-sm); text-align: center;",
                            span { style: "font-size: 2.25rem; font-weight: 700; color: #1f2937;", "{word}" }
                        }
                        button {
                            style: "padding: 0.5rem 1.5rem; border: none; border-radius: 999px; font-weight: 500; background: #e5e7eb; color: #1f2937; cursor: pointer;",
                            onclick: move |_| board.write().words.hide(),
                            "返回列表"
                        }
                    }
                } else {
                    div {
                        style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(8rem, 1fr)); gap: 1rem;",
                        for (index, label) in state.tile_labels().into_iter().enumerate() {
                            div {
                                key: "{index}",
                                class: "word-tile",
                                style: "padding: 1.5rem 0.75rem; border-radius: var(--radius-md, 8px); background: white; border: 1px solid #f3f4f6; text-align: center; cursor: pointer;",
                                onclick: move |_| {
                                    board.write().words.reveal(index);
                                },
                                span { style: "font-size: 1.125rem; font-weight: 500; color: #4b5563;", "{label}" }
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
    use huddle_core::Countdown;

    #[test]
    fn pause_then_restart_within_a_tick_leaves_one_ticker() {
        let mut timer = Countdown::new(60);
        let mut epoch = 0u64;

        timer.start();
        epoch += 1;
        let first = epoch;

        timer.pause();
        timer.start();
        epoch += 1;
        let second = epoch;

        let survivors: Vec<u64> = [first, second]
            .into_iter()
            .filter(|&started| ticker_should_continue(true, epoch, started, timer.is_running()))
            .collect();
        assert_eq!(survivors, vec![second]);
    }

    #[test]
    fn ticker_stops_when_paused_or_dropped() {
        assert!(ticker_should_continue(true, 4, 4, true));
        assert!(!ticker_should_continue(true, 4, 4, false));
        assert!(!ticker_should_continue(false, 4, 4, true));
    }

    #[test]
    fn disabled_timer_buttons_are_greyed_out() {
        assert!(timer_button_style(false, "#22c55e").contains("not-allowed"));
        let enabled = timer_button_style(true, "#22c55e");
        assert!(enabled.contains("background: #22c55e"));
        assert!(enabled.contains("cursor: pointer"));
    }
}
