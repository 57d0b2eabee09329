//! Per-side thinking time.
//!
//! The clock is informational only: running out of time is not a rule here,
//! so nothing in move legality or game state reads it.

use std::time::{Duration, Instant};

use crate::types::Color;

#[derive(Debug, Clone)]
pub struct GameClock {
    /// When the game (or the last reset) started
    started_at: Instant,
    /// When the previous move was accepted
    last_move_at: Instant,
    /// Time charged to White and Black
    spent: [Duration; 2],
}

impl Default for GameClock {
    fn default() -> Self {
        Self::start()
    }
}

impl GameClock {
    pub fn start() -> Self {
        Self::start_at(Instant::now())
    }

    pub fn start_at(now: Instant) -> Self {
        Self {
            started_at: now,
            last_move_at: now,
            spent: [Duration::ZERO; 2],
        }
    }

    /// Charges the time since the previous move to `mover`.
    pub fn record_move(&mut self, mover: Color) {
        self.record_move_at(mover, Instant::now());
    }

    pub fn record_move_at(&mut self, mover: Color, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_move_at);
        self.spent[mover.idx()] += elapsed;
        self.last_move_at = now.max(self.last_move_at);
    }

    /// Time `c` has used on moves already played.
    pub fn elapsed(&self, c: Color) -> Duration {
        self.spent[c.idx()]
    }

    /// Wall time since the clock started.
    pub fn since_start(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Format time as MM:SS
    pub fn format_time(duration: Duration) -> String {
        let total_secs = duration.as_secs();
        let mins = total_secs / 60;
        let secs = total_secs % 60;

        if duration.as_millis() < 10_000 {
            // Show tenths when under 10 seconds
            let tenths = (duration.as_millis() % 1000) / 100;
            format!("{}:{:02}.{}", mins, secs, tenths)
        } else {
            format!("{}:{:02}", mins, secs)
        }
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod clock_tests;
