//! Break notifications

use std::io::Write;

use notify_rust::Notification;
use tracing::{debug, warn};

/// Plays the alert when a break begins
pub trait Notifier {
    fn play_notification(&mut self);
}

/// Rings the terminal bell
pub struct BellNotifier<W: Write> {
    out: W,
}

impl<W: Write> BellNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for BellNotifier<W> {
    fn play_notification(&mut self) {
        if let Err(e) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            warn!("Failed to ring terminal bell: {}", e);
        }
    }
}

/// Desktop notification, falling back to the bell when none can be shown
pub struct DesktopNotifier<W: Write> {
    fallback: BellNotifier<W>,
}

impl<W: Write> DesktopNotifier<W> {
    pub fn new(fallback_out: W) -> Self {
        Self {
            fallback: BellNotifier::new(fallback_out),
        }
    }
}

impl<W: Write> Notifier for DesktopNotifier<W> {
    fn play_notification(&mut self) {
        let shown = Notification::new()
            .summary("Pomodoro")
            .body("Time is up! Take a break.")
            .show();
        if let Err(e) = shown {
            warn!("Failed to show desktop notification: {}", e);
            self.fallback.play_notification();
        }
    }
}

/// Does nothing
#[derive(Debug, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn play_notification(&mut self) {
        debug!("Break started, notifications disabled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_writes_bel() {
        let mut notifier = BellNotifier::new(Vec::new());
        notifier.play_notification();
        notifier.play_notification();
        assert_eq!(notifier.into_inner(), b"\x07\x07".to_vec());
    }
}
