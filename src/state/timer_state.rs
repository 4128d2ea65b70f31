//! Timer state structure and the derived remaining time

use serde::Serialize;
use tokio::time::Instant;

use super::Mode;

/// Remaining time of the current interval, split for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    /// Whole seconds left; negative once the end instant has passed
    pub total_seconds: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    pub fn from_total_seconds(total_seconds: i64) -> Self {
        let shown = total_seconds.max(0);
        Self {
            total_seconds,
            minutes: shown / 60,
            seconds: shown % 60,
        }
    }

    /// Full, not yet started interval of `minutes`
    pub fn full(minutes: u64) -> Self {
        let minutes = i64::try_from(minutes).unwrap_or(i64::MAX).min(i64::MAX / 60);
        Self {
            total_seconds: minutes.saturating_mul(60),
            minutes,
            seconds: 0,
        }
    }

    /// Time left until `end` as seen at `now`.
    ///
    /// Partial seconds round up, so the clock reads 00:00 exactly at `end`.
    pub fn until(end: Instant, now: Instant) -> Self {
        let total = if end > now {
            let left = end.saturating_duration_since(now);
            let secs = left.as_secs() as i64;
            if left.subsec_nanos() > 0 { secs + 1 } else { secs }
        } else {
            -(now.saturating_duration_since(end).as_secs() as i64)
        };
        Self::from_total_seconds(total)
    }

    pub fn is_expired(&self) -> bool {
        self.total_seconds <= 0
    }

    /// Format as MM:SS
    pub fn clock(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Whether the countdown is ticking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
}

impl Default for TimerStatus {
    fn default() -> Self {
        TimerStatus::Idle
    }
}

/// What the start/pause toggle does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Start,
    Pause,
    Resume,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Start => "Start",
            Action::Pause => "Pause",
            Action::Resume => "Resume",
        }
    }
}

/// State of the start/pause toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub action: Action,
    pub toggle_enabled: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            action: Action::Start,
            toggle_enabled: true,
        }
    }
}

/// Mutable countdown state, owned by the timer machine
#[derive(Debug, Clone)]
pub struct TimerState {
    pub mode: Mode,
    pub status: TimerStatus,
    /// Instant the running interval completes, set on every start
    pub end: Option<Instant>,
    pub remaining: Remaining,
    pub completed_focus_sessions: u32,
    pub break_count: u32,
    pub controls: Controls,
}

impl TimerState {
    /// Create an idle focus state showing `focus_minutes`
    pub fn new(focus_minutes: u64) -> Self {
        Self {
            mode: Mode::Focus,
            status: TimerStatus::Idle,
            end: None,
            remaining: Remaining::full(focus_minutes),
            completed_focus_sessions: 0,
            break_count: 0,
            controls: Controls::default(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(0)
    }
}
