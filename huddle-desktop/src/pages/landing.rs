use dioxus::prelude::*;
use huddle_core::ShellConfig;

use crate::routes::Route;

const ENTER_BUTTON_STYLE: &str = "display: inline-block; padding: 1.25rem 2.5rem; border-radius: 999px; background: #374151; color: #f3f4f6; font-size: 1.25rem; font-weight: 500; text-decoration: none; box-shadow: var(--shadow-lg);";

#[component]
pub fn Landing() -> Element {
    let config = use_context::<ShellConfig>();
    let title = config.title.clone();

    rsx! {
        main {
            class: "landing",
            style: "min-height: 100dvh; display: flex; flex-direction: column; align-items: center; justify-content: center; position: relative; overflow: hidden; background-color: #2e3440; background-image: radial-gradient(circle at center, #434c5e 0%, #2e3440 100%); font-family: -apple-system, BlinkMacSystemFont, 'PingFang SC', 'Microsoft YaHei', sans-serif;",

            span { style: "margin-bottom: 2rem; font-size: 8rem;", "🌐" }
            h1 { style: "margin: 0 0 1.5rem; font-size: 3rem; font-weight: 700; color: #e5e7eb; text-align: center;", "{title}" }
            p {
                style: "max-width: 42rem; margin: 0 0 3rem; padding: 0 1.5rem; font-size: 1.25rem; color: #9ca3af; text-align: center;",
                "一站式团建活动游戏管理系统，为您的团队提供丰富多彩的互动体验"
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center;",
                Link { to: Route::GamesPage {}, style: ENTER_BUTTON_STYLE, "进入系统" }
                Link {
                    to: Route::Desktop {},
                    style: "display: inline-block; padding: 1.25rem 2.5rem; border-radius: 999px; border: 1px solid #4b5563; color: #d1d5db; font-size: 1.25rem; text-decoration: none;",
                    "桌面模式"
                }
            }

            footer { style: "position: absolute; bottom: 2rem; font-size: 0.875rem; color: #6b7280;", "© 2023 团建活动展示系统" }
        }
    }
}
