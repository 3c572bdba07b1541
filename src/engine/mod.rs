//! Countdown engine module
//!
//! The engine owns the countdown state machine; presentation code talks to it
//! through control calls and listens through `CountdownObserver`.

pub mod observer;
pub mod timer_engine;

// Re-export main types
pub use observer::{ChannelObserver, CountdownObserver, Event};
pub use timer_engine::TimerEngine;
