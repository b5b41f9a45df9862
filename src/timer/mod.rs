//! One-second countdown for the current activity.

use std::time::{Duration, Instant};

/// Preset countdown lengths offered by the UI (minutes)
pub const TIMER_PRESETS_MINUTES: [u64; 4] = [5, 15, 30, 60];
pub const DEFAULT_TIMER_MINUTES: u64 = 15;

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { remaining_secs: u64 },
    Finished,
}

/// Decrementing counter driven by wall-clock ticks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    total_secs: u64,
    remaining_secs: u64,
    last_tick: Instant,
}

impl Countdown {
    pub fn new(total: Duration, now: Instant) -> Self {
        let secs = total.as_secs();
        Self { total_secs: secs, remaining_secs: secs, last_tick: now }
    }

    pub fn from_minutes(minutes: u64, now: Instant) -> Self {
        Self::new(Duration::from_secs(minutes.saturating_mul(60)), now)
    }

    /// Advance by the whole seconds elapsed since the last tick.
    ///
    /// Returns `None` when less than a second has passed or the countdown has
    /// already finished.
    pub fn tick(&mut self, now: Instant) -> Option<TimerEvent> {
        if self.is_finished() {
            return None;
        }

        let elapsed = now.saturating_duration_since(self.last_tick);
        let whole_secs = elapsed.as_secs();
        if whole_secs == 0 {
            return None;
        }

        self.last_tick += TICK * whole_secs as u32;
        self.remaining_secs = self.remaining_secs.saturating_sub(whole_secs);

        if self.remaining_secs == 0 {
            Some(TimerEvent::Finished)
        } else {
            Some(TimerEvent::Tick { remaining_secs: self.remaining_secs })
        }
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Remaining time as `MM:SS` (minutes may exceed 59)
    pub fn display(&self) -> String {
        format_mm_ss(self.remaining_secs)
    }
}

/// The preset after `minutes`, wrapping to the shortest one
pub fn next_preset(minutes: u64) -> u64 {
    TIMER_PRESETS_MINUTES
        .iter()
        .copied()
        .find(|&preset| preset > minutes)
        .unwrap_or(TIMER_PRESETS_MINUTES[0])
}

pub fn format_mm_ss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
