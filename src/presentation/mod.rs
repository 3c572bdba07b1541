//! Terminal presentation module
//!
//! The collaborators around the engine: prompts that collect the settings,
//! the renderer for countdown events, and the stdin control keys.

pub mod controls;
pub mod display;
pub mod input;

// Re-export main types
pub use controls::{parse_control, Control, CONTROLS_HELP};
pub use display::{Display, OutputMode};
pub use input::{InputDialog, Settings};
