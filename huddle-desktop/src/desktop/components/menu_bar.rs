use dioxus::prelude::*;
use huddle_core::clock::ClockFace;

const MENU_ITEMS: [&str; 5] = ["文件", "编辑", "查看", "窗口", "帮助"];

#[component]
pub fn MenuBar(title: String, clock: ClockFace) -> Element {
    rsx! {
        div {
            class: "menu-bar",
            style: "position: fixed; top: 0; left: 0; right: 0; height: 2rem; z-index: 50; display: flex; align-items: center; justify-content: space-between; padding: 0 1rem; background: var(--menubar-bg); backdrop-filter: blur(16px); color: var(--menubar-text); font-size: 0.875rem; user-select: none;",

            div {
                style: "display: flex; align-items: center; gap: 1rem;",
                span { style: "font-size: 1.25rem;", "🌐" }
                span { style: "font-weight: 600;", "{title}" }
                for item in MENU_ITEMS {
                    span { "{item}" }
                }
            }

            div {
                style: "display: flex; align-items: center; gap: 1rem;",
                span { "🔋 100%" }
                span { "📶 Wi-Fi" }
                span { title: "{clock.date}", "{clock.time}" }
            }
        }
    }
}
