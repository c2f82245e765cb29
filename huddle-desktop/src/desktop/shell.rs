use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use huddle_core::{PanelKind, ShellConfig, ShellCoordinator, ShellEvent};

use crate::desktop::components::boot_screen::BootScreen;
use crate::desktop::components::dock::Dock;
use crate::desktop::components::menu_bar::MenuBar;
use crate::desktop::components::workspace_canvas::WorkspaceCanvas;
use crate::desktop::effects;
use crate::desktop::state::dispatch_shell_event;

#[component]
pub fn DesktopShell() -> Element {
    let config = use_context::<ShellConfig>();

    let mut shell = use_signal(|| ShellCoordinator::new(&config));
    let booting = use_signal(|| true);
    let clock = use_signal(effects::current_clock_face);
    let mut timers_started = use_signal(|| false);
    let timers_alive = use_hook(|| Rc::new(Cell::new(true)));

    {
        let timers_alive = timers_alive.clone();
        use_drop(move || {
            timers_alive.set(false);
        });
    }

    {
        let timers_alive = timers_alive.clone();
        let boot_duration_ms = config.boot_duration_ms;
        let clock_refresh_secs = config.clock_refresh_secs;
        use_effect(move || {
            if timers_started() {
                return;
            }
            timers_started.set(true);

            spawn(effects::finish_boot(
                booting,
                boot_duration_ms,
                timers_alive.clone(),
            ));
            spawn(effects::run_clock(
                clock,
                clock_refresh_secs,
                timers_alive.clone(),
            ));
        });
    }

    let on_event = use_callback(move |event: ShellEvent| {
        dispatch_shell_event(&mut shell, event);
    });

    let open_panel = use_callback(move |id: PanelKind| {
        dispatch_shell_event(&mut shell, ShellEvent::Open { id });
    });

    if booting() {
        return rsx! {
            style { {DEFAULT_TOKENS} }
            BootScreen {}
        };
    }

    let snapshot = shell.read().snapshot();
    let launchers = snapshot.launchers.clone();
    let dock_visible = snapshot.dock_visible;

    rsx! {
        style { {DEFAULT_TOKENS} }

        div {
            class: "desktop-shell",
            style: "width: 100vw; height: 100dvh; position: relative; overflow: hidden;",

            MenuBar { title: config.title.clone(), clock: clock() }

            WorkspaceCanvas { snapshot, on_event }

            if dock_visible {
                Dock { launchers, on_open: open_panel }
            }
        }
    }
}

const DEFAULT_TOKENS: &str = r#"
:root {
    /* Colors */
    --bg-desktop: #2e3440;
    --text-primary: #1f2937;
    --text-secondary: #4b5563;
    --border-color: #e5e7eb;

    /* Semantic colors */
    --window-bg: #ffffff;
    --titlebar-bg: #f3f4f6;
    --menubar-bg: rgba(17, 24, 39, 0.5);
    --menubar-text: #e5e7eb;
    --dock-bg: rgba(255, 255, 255, 0.2);

    /* Spacing & Radius */
    --radius-sm: 4px;
    --radius-md: 8px;
    --radius-lg: 12px;

    /* Shadows */
    --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.1);
    --shadow-md: 0 4px 6px rgba(0, 0, 0, 0.2);
    --shadow-lg: 0 10px 40px rgba(0, 0, 0, 0.3);
}

* {
    box-sizing: border-box;
}

html, body, #main {
    width: 100%;
    height: 100%;
    overflow: hidden;
    overscroll-behavior: none;
}

body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'PingFang SC', 'Microsoft YaHei', sans-serif;
    background: var(--bg-desktop);
}

.boot-progress {
    width: 0;
    animation: boot-progress 1.5s ease-out forwards;
}

@keyframes boot-progress {
    to {
        width: 100%;
    }
}

.dock-icon {
    transition: transform 0.15s ease-out;
}

.dock-icon:hover {
    transform: translateY(-10px) scale(1.1);
}

.desktop-icon:hover {
    transform: scale(1.05);
}

.desktop-icon:hover .desktop-icon-label {
    background: rgba(31, 41, 55, 0.4) !important;
}

.word-tile:hover {
    background: #fdf2f8 !important;
}

.sentence-tile:hover {
    background: #f0fdf4 !important;
}

.window-titlebar:active {
    cursor: grabbing;
}

.floating-window.fullscreen .window-titlebar:active {
    cursor: default;
}
"#;
