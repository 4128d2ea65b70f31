//! Collaborators module
//!
//! Rendering and notification side effects the timer machine calls into.

pub mod notify;
pub mod render;

// Re-export main types
pub use notify::{BellNotifier, DesktopNotifier, Notifier, SilentNotifier};
pub use render::{JsonRenderer, RenderEvent, Renderer, TerminalRenderer};
