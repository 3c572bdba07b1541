//! Keyboard controls for a running countdown

use tracing::debug;

use crate::{engine::TimerEngine, error::Result};

pub const CONTROLS_HELP: &str = "Controls: [Enter]/p pause-resume, r resume, s/q stop";

/// A user action on the countdown window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    TogglePause,
    Resume,
    Stop,
}

impl Control {
    /// Forward the action to the engine
    pub fn apply(self, engine: &TimerEngine) -> Result<()> {
        debug!("Applying control {:?}", self);
        match self {
            Control::TogglePause => engine.toggle_pause().map(|_| ()),
            Control::Resume => engine.resume(),
            Control::Stop => engine.stop(),
        }
    }
}

/// Map one line of input to a control, if it names one
pub fn parse_control(line: &str) -> Option<Control> {
    match line.trim().to_lowercase().as_str() {
        "" | "p" | "pause" => Some(Control::TogglePause),
        "r" | "resume" => Some(Control::Resume),
        "s" | "stop" | "q" | "quit" => Some(Control::Stop),
        _ => None,
    }
}
