use dioxus::prelude::*;
use huddle_core::{PanelKind, ShellEvent, WindowView};

use crate::games::{DrawGuessView, ParksView, WhispersView};
use crate::interop::{
    capture_window_pointer, pointer_buttons, pointer_point, release_window_pointer,
};

const TITLEBAR_HEIGHT_PX: i32 = 34;

fn window_frame_style(window: &WindowView) -> String {
    if window.is_full_screen {
        "position: fixed; inset: 0; z-index: 50; margin: 0; display: flex; flex-direction: column; \
         background: var(--window-bg); border: none; border-radius: 0; overflow: hidden; \
         pointer-events: auto;"
            .to_string()
    } else {
        let cursor = if window.is_dragging { "grabbing" } else { "auto" };
        format!(
            "position: absolute; top: 10%; left: 50%; width: 90vw; max-width: 72rem; height: 80vh; \
             transform: translate(calc(-50% + {}px), {}px); display: flex; flex-direction: column; \
             background: var(--window-bg); border: 1px solid var(--border-color); border-radius: \
             var(--radius-md, 8px); overflow: hidden; box-shadow: var(--shadow-lg); \
             pointer-events: auto; cursor: {cursor};",
            window.position.x, window.position.y
        )
    }
}

/// A title-bar press may start a drag only on a windowed frame with no drag in flight.
fn accepts_title_press(window: &WindowView) -> bool {
    !window.is_full_screen && window.drag_pointer.is_none()
}

#[component]
pub fn FloatingWindow(window: WindowView, on_event: Callback<ShellEvent>) -> Element {
    let id = window.id;
    let is_full_screen = window.is_full_screen;
    let drag_pointer = window.drag_pointer;
    let accepts_press = accepts_title_press(&window);
    let window_style = window_frame_style(&window);
    let titlebar_cursor = if is_full_screen { "default" } else { "grab" };

    rsx! {
        div {
            class: if is_full_screen { "floating-window fullscreen" } else { "floating-window" },
            role: "dialog",
            "aria-label": window.title.clone(),
            tabindex: "0",
            style: "{window_style}",
            onkeydown: move |e| {
                if e.key() != Key::Escape {
                    return;
                }
                if let Some(pointer_id) = drag_pointer {
                    e.prevent_default();
                    on_event.call(ShellEvent::DragCancel { id, pointer_id });
                }
            },
            onpointermove: move |e| {
                let Some(pointer_id) = drag_pointer else {
                    return;
                };
                if e.data().pointer_id() != pointer_id {
                    return;
                }

                // Capture can be lost across focus changes; no held buttons ends the drag.
                if pointer_buttons(&e) == 0 {
                    on_event.call(ShellEvent::DragEnd { id, pointer_id });
                    return;
                }

                on_event.call(ShellEvent::DragMove {
                    id,
                    pointer_id,
                    pointer: pointer_point(&e),
                });
            },
            onpointerup: move |e| {
                let Some(pointer_id) = drag_pointer else {
                    return;
                };
                if e.data().pointer_id() != pointer_id {
                    return;
                }
                release_window_pointer(&e, pointer_id);
                on_event.call(ShellEvent::DragEnd { id, pointer_id });
            },
            onpointercancel: move |e| {
                let Some(pointer_id) = drag_pointer else {
                    return;
                };
                if e.data().pointer_id() != pointer_id {
                    return;
                }
                release_window_pointer(&e, pointer_id);
                on_event.call(ShellEvent::DragCancel { id, pointer_id });
            },

            div {
                class: "window-titlebar",
                style: "height: {TITLEBAR_HEIGHT_PX}px; flex-shrink: 0; display: flex; align-items: center; padding: 0 0.75rem; background: var(--titlebar-bg); border-bottom: 1px solid var(--border-color); cursor: {titlebar_cursor}; user-select: none; touch-action: none;",
                onpointerdown: move |e| {
                    if !accepts_press {
                        return;
                    }
                    e.prevent_default();
                    let pointer_id = e.data().pointer_id();
                    capture_window_pointer(&e, pointer_id);
                    on_event.call(ShellEvent::DragStart {
                        id,
                        pointer_id,
                        pointer: pointer_point(&e),
                    });
                },

                WindowControls { id, on_event }

                div {
                    style: "flex: 1; text-align: center;",
                    h3 { style: "margin: 0; font-size: 0.75rem; font-weight: 500; color: var(--text-secondary);", "{window.title}" }
                }
                div { style: "width: 2.5rem;" }
            }

            div {
                class: "window-content",
                style: "flex: 1; overflow-y: auto; background: var(--window-bg);",

                match id {
                    PanelKind::Parks => rsx! { ParksView {} },
                    PanelKind::DrawGuess => rsx! { DrawGuessView {} },
                    PanelKind::Whispers => rsx! { WhispersView {} },
                }
            }
        }
    }
}

#[component]
fn WindowControls(id: PanelKind, on_event: Callback<ShellEvent>) -> Element {
    rsx! {
        div {
            class: "window-controls",
            style: "display: flex; gap: 0.375rem;",

            button {
                class: "window-close",
                "aria-label": "Close",
                style: "width: 0.75rem; height: 0.75rem; padding: 0; border: none; border-radius: 999px; background: #ff5f57; cursor: pointer;",
                onpointerdown: move |e| e.stop_propagation(),
                onclick: move |e| {
                    e.stop_propagation();
                    on_event.call(ShellEvent::Close { id });
                },
            }
            div {
                style: "width: 0.75rem; height: 0.75rem; border-radius: 999px; background: #febc2e;",
            }
            button {
                class: "window-fullscreen",
                "aria-label": "Toggle full screen",
                style: "width: 0.75rem; height: 0.75rem; padding: 0; border: none; border-radius: 999px; background: #28c840; cursor: pointer;",
                onpointerdown: move |e| e.stop_propagation(),
                onclick: move |e| {
                    e.stop_propagation();
                    on_event.call(ShellEvent::ToggleFullScreen { id });
                },
            }
        }
    }
}
