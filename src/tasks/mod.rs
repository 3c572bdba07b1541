//! Background tasks module
//!
//! This module contains the task that drives a running countdown.

pub mod tick_loop;

pub use tick_loop::TICK;
pub(crate) use tick_loop::{tick_loop, Command};
