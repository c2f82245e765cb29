use dioxus::prelude::*;

#[component]
pub fn BootScreen() -> Element {
    rsx! {
        div {
            class: "boot-screen",
            style: "width: 100vw; height: 100dvh; display: flex; flex-direction: column; align-items: center; justify-content: center; background: #111827;",
            span { style: "font-size: 4.5rem; margin-bottom: 2rem;", "🌐" }
            div {
                style: "width: 5rem; height: 0.75rem; background: #374151; border-radius: 999px; overflow: hidden;",
                div {
                    class: "boot-progress",
                    style: "height: 100%; background: #9ca3af; border-radius: 999px;",
                }
            }
        }
    }
}
