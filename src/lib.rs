//! PPClock - a countdown timer for presentations
//!
//! The core is a single-use countdown engine that ticks once per second on a
//! background task and reports to an observer. The presentation modules put a
//! terminal face on it.

pub mod config;
pub mod engine;
pub mod error;
pub mod presentation;
pub mod state;
pub mod tasks;
pub mod time;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use engine::{ChannelObserver, CountdownObserver, Event, TimerEngine};
pub use error::{Result, TimerError};
pub use state::{Countdown, FontSize, TimerState};
pub use time::{format, validate_and_combine, TimerDuration};
pub use utils::signals::shutdown_signal;
