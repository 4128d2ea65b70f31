//! Tomato Clock - a terminal pomodoro timer
//!
//! This library provides the pomodoro state machine, the countdown scheduler
//! that drives it, and the terminal renderers and notifiers it talks to.

pub mod config;
pub mod controls;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::Config;
pub use state::{Mode, TimerConfig, TimerMachine};
pub use tasks::{control_input_task, countdown_task};
pub use utils::signals::shutdown_signal;
