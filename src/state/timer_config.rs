//! Interval lengths and the long break cadence

use super::Mode;

/// Longest interval, in minutes, the timer accepts
pub const MAX_MINUTES: u64 = 24 * 60;

/// Durations in whole minutes plus the long break cadence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerConfig {
    pub focus: u64,
    pub short_break: u64,
    pub long_break: u64,
    /// Focus sessions between long breaks, at least 1
    pub long_break_interval: u32,
    /// Start the next focus interval as soon as a break ends
    pub auto_start_focus: bool,
    /// Count a resume after a pause as a new focus session
    pub count_resumes: bool,
}

impl TimerConfig {
    pub fn new(focus: u64, short_break: u64, long_break: u64, long_break_interval: u32) -> Self {
        Self {
            focus,
            short_break,
            long_break,
            long_break_interval: long_break_interval.max(1),
            auto_start_focus: false,
            count_resumes: true,
        }
    }

    pub fn with_auto_start_focus(mut self, auto_start_focus: bool) -> Self {
        self.auto_start_focus = auto_start_focus;
        self
    }

    pub fn with_count_resumes(mut self, count_resumes: bool) -> Self {
        self.count_resumes = count_resumes;
        self
    }

    /// Interval length in minutes for the given mode
    pub fn minutes_for(&self, mode: Mode) -> u64 {
        match mode {
            Mode::Focus => self.focus,
            Mode::ShortBreak => self.short_break,
            Mode::LongBreak => self.long_break,
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::new(25, 5, 15, 4)
    }
}
