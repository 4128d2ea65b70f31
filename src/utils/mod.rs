//! Utility functions module
//!
//! Clocks and signal handling shared by the rest of the crate.

pub mod clock;
pub mod signals;

// Re-export main items
pub use clock::{Clock, SystemClock};
pub use signals::shutdown_signal;
