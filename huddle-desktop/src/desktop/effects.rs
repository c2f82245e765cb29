use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::{Signal, WritableExt};
use gloo_timers::future::TimeoutFuture;
use huddle_core::clock::ClockFace;

/// Hold the boot screen for `duration_ms`, then reveal the desktop.
pub async fn finish_boot(mut booting: Signal<bool>, duration_ms: u32, alive: Rc<Cell<bool>>) {
    TimeoutFuture::new(duration_ms).await;
    if alive.get() {
        booting.set(false);
        dioxus_logger::tracing::info!("desktop ready");
    }
}

/// Refresh the menu-bar clock until the shell is torn down.
pub async fn run_clock(mut clock: Signal<ClockFace>, refresh_secs: u32, alive: Rc<Cell<bool>>) {
    let interval_ms = refresh_secs.saturating_mul(1000);
    while alive.get() {
        clock.set(current_clock_face());
        TimeoutFuture::new(interval_ms).await;
    }
}

pub fn current_clock_face() -> ClockFace {
    ClockFace::at(chrono::Local::now().naive_local())
}
