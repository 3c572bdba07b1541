//! Error types for the countdown core

use thiserror::Error;

use crate::state::TimerState;

/// Errors raised by the countdown core.
///
/// All of them are local and recoverable: the worst case is that the engine
/// is discarded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// The entered duration cannot be used to start a countdown
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    /// The requested action is not allowed in the current state
    #[error("Cannot {action} while {from}")]
    InvalidTransition {
        from: TimerState,
        action: &'static str,
    },

    /// `start` was called on an engine that already left Idle
    #[error("Timer already started (state: {0})")]
    AlreadyStarted(TimerState),

    /// `start` was called outside of a tokio runtime
    #[error("No tokio runtime available to run the tick loop")]
    NoRuntime,

    /// A thread panicked while holding the countdown lock
    #[error("Countdown state lock poisoned")]
    StatePoisoned,
}

/// Result type alias for TimerError
pub type Result<T, E = TimerError> = std::result::Result<T, E>;
