//! Round countdown driven by an external one-second tick

use serde::{Deserialize, Serialize};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer was not running; nothing changed
    Idle,
    /// One second elapsed
    Ticked,
    /// Reached zero and stopped
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    duration_secs: u32,
    remaining_secs: u32,
    running: bool,
}

impl Countdown {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            running: false,
        }
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn can_start(&self) -> bool {
        !self.running
    }

    pub fn can_pause(&self) -> bool {
        self.running
    }

    /// Restart from the full duration and run.
    pub fn start(&mut self) {
        self.remaining_secs = self.duration_secs;
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Back to the full duration, stopped.
    pub fn reset(&mut self) {
        self.remaining_secs = self.duration_secs;
        self.running = false;
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        if self.remaining_secs <= 1 {
            self.remaining_secs = 0;
            self.running = false;
            return TickOutcome::Finished;
        }
        self.remaining_secs -= 1;
        TickOutcome::Ticked
    }

    /// `M:SS` display form.
    pub fn display(&self) -> String {
        format!("{}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped_at_full_duration() {
        let timer = Countdown::new(60);
        assert_eq!(timer.remaining_secs(), 60);
        assert!(timer.can_start());
        assert!(!timer.can_pause());
        assert_eq!(timer.display(), "1:00");
    }

    #[test]
    fn tick_while_stopped_is_idle() {
        let mut timer = Countdown::new(60);
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.remaining_secs(), 60);
    }

    #[test]
    fn runs_down_to_zero_and_stops() {
        let mut timer = Countdown::new(3);
        timer.start();
        assert_eq!(timer.tick(), TickOutcome::Ticked);
        assert_eq!(timer.tick(), TickOutcome::Ticked);
        assert_eq!(timer.remaining_secs(), 1);
        assert_eq!(timer.tick(), TickOutcome::Finished);
        assert_eq!(timer.remaining_secs(), 0);
        assert!(!timer.is_running());
        assert_eq!(timer.tick(), TickOutcome::Idle);
    }

    #[test]
    fn start_after_pause_restarts_from_full() {
        let mut timer = Countdown::new(60);
        timer.start();
        timer.tick();
        timer.tick();
        timer.pause();
        assert_eq!(timer.remaining_secs(), 58);
        assert!(timer.can_start());

        timer.start();
        assert_eq!(timer.remaining_secs(), 60);
        assert!(timer.is_running());
    }

    #[test]
    fn reset_stops_and_refills() {
        let mut timer = Countdown::new(60);
        timer.start();
        timer.tick();
        timer.reset();
        assert_eq!(timer.remaining_secs(), 60);
        assert!(!timer.is_running());
    }

    #[test]
    fn display_pads_seconds() {
        let mut timer = Countdown::new(65);
        timer.start();
        for _ in 0..60 {
            timer.tick();
        }
        assert_eq!(timer.display(), "0:05");
    }
}
