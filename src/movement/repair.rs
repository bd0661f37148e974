//! Movement domain: the timed repair action.

use std::time::Duration;

use bevy::prelude::*;

/// Fire-and-forget countdown that keeps the repair busy flag raised.
#[derive(Debug, Clone)]
pub struct RepairAction {
    timer: Timer,
    running: bool,
}

impl RepairAction {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(duration_secs, TimerMode::Once),
            running: false,
        }
    }

    /// Start the countdown. Returns false and leaves the timer alone if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.timer.reset();
        self.running = true;
        true
    }

    /// Advance the countdown; returns true on the tick it completes.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if !self.running {
            return false;
        }
        self.timer.tick(delta);
        if self.timer.just_finished() {
            self.running = false;
            return true;
        }
        false
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
