//! State management module
//!
//! Timer modes, configuration, the countdown state and the machine that
//! drives them.

pub mod machine;
pub mod mode;
pub mod timer_config;
pub mod timer_state;

// Re-export main types
pub use machine::{TickOutcome, TimerMachine};
pub use mode::Mode;
pub use timer_config::{TimerConfig, MAX_MINUTES};
pub use timer_state::{Action, Controls, Remaining, TimerState, TimerStatus};
