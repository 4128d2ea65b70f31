//! Background tasks module
//!
//! The countdown scheduler and the control input reader.

pub mod countdown;
pub mod input;

// Re-export main functions
pub use countdown::countdown_task;
pub use input::control_input_task;
