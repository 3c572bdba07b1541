//! State management module
//!
//! This module contains the countdown data model.

pub mod font;
pub mod timer_state;

// Re-export main types
pub use font::FontSize;
pub use timer_state::{Countdown, TimerState};
