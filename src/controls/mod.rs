//! Controls module
//!
//! Terminal counterparts of the timer's buttons: parsing typed commands and
//! applying them to the machine.

pub mod commands;
pub mod handlers;

pub use commands::{Command, HELP};
pub use handlers::{handle_command, Flow};
