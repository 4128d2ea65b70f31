//! Pomodoro state machine
//!
//! Owns the current mode, the countdown and the session counters. Every
//! visible change is pushed to the injected renderer; the scheduler drives it
//! through [`TimerMachine::tick`].

use std::time::Duration;
use tracing::{debug, info, warn};

use super::{
    Action, Controls, Mode, Remaining, TimerConfig, TimerState, TimerStatus, MAX_MINUTES,
};
use crate::{
    services::{Notifier, Renderer},
    utils::{Clock, SystemClock},
};

/// Result of one scheduler tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown is not running
    Idle,
    /// Still counting down
    Counting(Remaining),
    /// The interval ran out and the machine moved on
    Expired { from: Mode, to: Mode },
}

/// The pomodoro timer: focus intervals, short breaks and long breaks
pub struct TimerMachine<C: Clock = SystemClock> {
    /// Configuration given at startup, restored by `restart`
    initial_config: TimerConfig,
    config: TimerConfig,
    state: TimerState,
    /// Id of the tick schedule the scheduler should run, if any
    schedule: Option<u64>,
    last_schedule: u64,
    clock: C,
    renderer: Box<dyn Renderer + Send>,
    notifier: Box<dyn Notifier + Send>,
}

impl<C: Clock> TimerMachine<C> {
    /// Create a machine idle in focus mode and draw its first frame
    pub fn new(
        config: TimerConfig,
        clock: C,
        renderer: Box<dyn Renderer + Send>,
        notifier: Box<dyn Notifier + Send>,
    ) -> Self {
        let mut machine = Self {
            initial_config: config.clone(),
            state: TimerState::new(config.focus),
            config,
            schedule: None,
            last_schedule: 0,
            clock,
            renderer,
            notifier,
        };
        machine.reset();
        machine
    }

    /// Switch to `mode` and show its full interval, without starting it
    pub fn switch_mode(&mut self, mode: Mode) {
        self.cancel_schedule();
        self.state.mode = mode;
        self.state.remaining = Remaining::full(self.config.minutes_for(mode));
        self.state.status = TimerStatus::Idle;
        debug!("Switched to {} ({})", mode, self.state.remaining.clock());
        self.renderer.render_idle(mode, self.state.remaining);
    }

    /// Start or resume the countdown from the current remaining time.
    ///
    /// Returns false when the countdown was already running.
    pub fn start(&mut self) -> bool {
        if self.state.is_running() {
            debug!("Start ignored, countdown already running");
            return false;
        }

        let resuming = self.state.status == TimerStatus::Paused;
        let total = self.state.remaining.total_seconds.max(0) as u64;
        let now = self.clock.now();
        let end = now.checked_add(Duration::from_secs(total)).unwrap_or_else(|| {
            warn!("Interval of {}s out of range, capping at {}min", total, MAX_MINUTES);
            now + Duration::from_secs(MAX_MINUTES * 60)
        });
        self.state.end = Some(end);

        let mode = self.state.mode;
        if mode.is_break() {
            self.notifier.play_notification();
            self.state.break_count += 1;
            info!(
                "{} started ({}), break #{}",
                mode.label(),
                self.state.remaining.clock(),
                self.state.break_count
            );
            self.renderer.render_session_count(self.state.break_count);
            self.set_controls(Action::Pause, false);
        } else {
            if resuming && !self.config.count_resumes {
                info!("Focus resumed at {}", self.state.remaining.clock());
            } else {
                self.state.completed_focus_sessions += 1;
                info!(
                    "Focus session #{} started ({})",
                    self.state.completed_focus_sessions,
                    self.state.remaining.clock()
                );
            }
            self.set_controls(Action::Pause, true);
        }

        self.state.status = TimerStatus::Running;
        self.open_schedule();
        true
    }

    /// Pause a running focus interval, keeping the remaining time.
    ///
    /// Breaks cannot be paused; returns false when nothing was paused.
    pub fn stop(&mut self) -> bool {
        if self.state.mode != Mode::Focus || !self.state.is_running() {
            debug!("Pause ignored in {} ({:?})", self.state.mode, self.state.status);
            return false;
        }

        self.cancel_schedule();
        self.state.status = TimerStatus::Paused;
        info!("Focus paused at {}", self.state.remaining.clock());
        self.set_controls(Action::Resume, true);
        true
    }

    /// Press the start/pause toggle
    pub fn toggle(&mut self) -> bool {
        if !self.state.controls.toggle_enabled {
            debug!("Toggle ignored, disabled during {}", self.state.mode);
            return false;
        }
        match self.state.controls.action {
            Action::Start | Action::Resume => self.start(),
            Action::Pause => self.stop(),
        }
    }

    /// Lengthen the next focus interval by `minutes` while a break is on.
    ///
    /// Ignored during focus; returns whether the focus length changed. The
    /// focus length never grows past [`MAX_MINUTES`].
    pub fn extend(&mut self, minutes: u64) -> bool {
        if self.state.mode == Mode::Focus {
            debug!("Extend by {}min ignored during focus", minutes);
            return false;
        }
        if self.config.focus >= MAX_MINUTES {
            debug!("Extend by {}min ignored, focus already {}min", minutes, MAX_MINUTES);
            return false;
        }

        self.config.focus = self.config.focus.saturating_add(minutes).min(MAX_MINUTES);
        info!("Next focus extended by {}min to {}min", minutes, self.config.focus);
        true
    }

    /// Hard reset: startup configuration, zero counters, idle focus
    pub fn restart(&mut self) {
        info!("Restarting timer");
        self.config = self.initial_config.clone();
        self.reset();
    }

    /// Re-evaluate the remaining time; moves to the next mode on expiry
    pub fn tick(&mut self) -> TickOutcome {
        let end = match (self.state.status, self.state.end) {
            (TimerStatus::Running, Some(end)) => end,
            _ => return TickOutcome::Idle,
        };

        let mode = self.state.mode;
        let remaining = Remaining::until(end, self.clock.now());
        self.state.remaining = remaining;
        self.renderer.render_tick(mode, remaining);

        if !remaining.is_expired() {
            return TickOutcome::Counting(remaining);
        }

        self.cancel_schedule();
        let next = mode.next(
            self.state.completed_focus_sessions,
            self.config.long_break_interval,
        );
        info!("{} finished, switching to {}", mode.label(), next.label());
        self.switch_mode(next);

        if next.is_break() || self.config.auto_start_focus {
            self.start();
        } else {
            self.set_controls(Action::Start, true);
        }

        TickOutcome::Expired { from: mode, to: next }
    }

    /// Id of the tick schedule that should be running, `None` when idle or paused
    pub fn schedule(&self) -> Option<u64> {
        self.schedule
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn remaining(&self) -> Remaining {
        self.state.remaining
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn completed_focus_sessions(&self) -> u32 {
        self.state.completed_focus_sessions
    }

    pub fn break_count(&self) -> u32 {
        self.state.break_count
    }

    /// Let the renderer close its output
    pub fn finish(&mut self) {
        self.cancel_schedule();
        self.renderer.finish();
    }

    fn reset(&mut self) {
        self.state = TimerState::new(self.config.focus);
        self.switch_mode(Mode::Focus);
        self.renderer.render_session_count(0);
        self.set_controls(Action::Start, true);
    }

    fn set_controls(&mut self, action: Action, toggle_enabled: bool) {
        let controls = Controls {
            action,
            toggle_enabled,
        };
        self.state.controls = controls;
        self.renderer.render_controls(controls);
    }

    fn open_schedule(&mut self) {
        self.last_schedule += 1;
        if let Some(old) = self.schedule.replace(self.last_schedule) {
            debug!("Tick schedule {} superseded by {}", old, self.last_schedule);
        }
    }

    fn cancel_schedule(&mut self) {
        if let Some(old) = self.schedule.take() {
            debug!("Tick schedule {} cancelled", old);
        }
    }
}
