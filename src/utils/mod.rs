//! Process-level helpers
//!
//! Currently only the termination signal future that stops a running countdown.

pub mod signals;

pub use signals::shutdown_signal;
