//! Time source module
//!
//! Pure helpers for turning user input into a duration and remaining seconds
//! into display text.

pub mod duration;
pub mod format;

// Re-export main types
pub use duration::{validate_and_combine, TimerDuration, MAX_INPUT_MINUTES};
pub use format::{format, is_warning, progress_pct, WARNING_THRESHOLD_SECS};
