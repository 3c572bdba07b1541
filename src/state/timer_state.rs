//! Timer state structure and management

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time::progress_pct;

/// Lifecycle phase of a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Finished,
    Stopped,
}

impl TimerState {
    /// Check if the countdown can no longer change
    pub fn is_terminal(self) -> bool {
        matches!(self, TimerState::Finished | TimerState::Stopped)
    }

    /// Check if the tick loop is alive in this state
    pub fn is_active(self) -> bool {
        matches!(self, TimerState::Running | TimerState::Paused)
    }
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimerState::Idle => "idle",
            TimerState::Running => "running",
            TimerState::Paused => "paused",
            TimerState::Finished => "finished",
            TimerState::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// Snapshot of a countdown: its phase plus the seconds left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub state: TimerState,
    pub total_seconds: u64,
    pub remaining_seconds: u64,
}

impl Countdown {
    /// Create an idle countdown with nothing loaded
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            total_seconds: 0,
            remaining_seconds: 0,
        }
    }

    /// Get remaining seconds where they carry meaning
    pub fn remaining_seconds(&self) -> Option<u64> {
        match self.state {
            TimerState::Running | TimerState::Paused | TimerState::Finished => {
                Some(self.remaining_seconds)
            }
            TimerState::Idle | TimerState::Stopped => None,
        }
    }

    pub fn progress_pct(&self) -> u8 {
        progress_pct(self.total_seconds, self.remaining_seconds)
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}
