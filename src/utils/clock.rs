//! Time sources for the countdown

use tokio::time::Instant;

/// Source of "now" for the timer machine
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Tokio's clock; follows paused time in tests
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_system_clock_follows_tokio_time() {
        let start = SystemClock.now();
        tokio::time::advance(std::time::Duration::from_secs(3)).await;
        assert_eq!(SystemClock.now() - start, std::time::Duration::from_secs(3));
    }
}
