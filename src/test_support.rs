//! Recording collaborators for unit tests

use std::{
    sync::{
        atomic::{AtomicU32, AtomicU64, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use tokio::time::Instant;

use crate::{
    services::{Notifier, RenderEvent, Renderer},
    state::{Controls, Mode, Remaining, TimerConfig, TimerMachine},
    utils::Clock,
};

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    offset_ms: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset_ms.fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn advance_secs(&self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + Duration::from_millis(self.offset_ms.load(Ordering::SeqCst))
    }
}

/// Renderer that keeps every event; clones share the log
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    events: Arc<Mutex<Vec<RenderEvent>>>,
}

impl RecordingRenderer {
    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Modes passed to `render_idle`, in order
    pub fn idle_modes(&self) -> Vec<Mode> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                RenderEvent::Idle { mode, .. } => Some(mode),
                _ => None,
            })
            .collect()
    }

    pub fn session_counts(&self) -> Vec<u32> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                RenderEvent::SessionCount { count } => Some(count),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: RenderEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Renderer for RecordingRenderer {
    fn render_idle(&mut self, mode: Mode, remaining: Remaining) {
        self.push(RenderEvent::Idle {
            mode,
            minutes: remaining.minutes,
            seconds: remaining.seconds,
            total_seconds: remaining.total_seconds,
        });
    }

    fn render_tick(&mut self, mode: Mode, remaining: Remaining) {
        self.push(RenderEvent::Tick {
            mode,
            minutes: remaining.minutes,
            seconds: remaining.seconds,
            total_seconds: remaining.total_seconds,
        });
    }

    fn render_session_count(&mut self, count: u32) {
        self.push(RenderEvent::SessionCount { count });
    }

    fn render_controls(&mut self, controls: Controls) {
        self.push(RenderEvent::Controls {
            action: controls.action,
            toggle_enabled: controls.toggle_enabled,
        });
    }
}

/// Notifier that counts how often it was played
#[derive(Clone, Default)]
pub struct CountingNotifier {
    played: Arc<AtomicU32>,
}

impl CountingNotifier {
    pub fn count(&self) -> u32 {
        self.played.load(Ordering::SeqCst)
    }
}

impl Notifier for CountingNotifier {
    fn play_notification(&mut self) {
        self.played.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct TestHarness {
    pub machine: TimerMachine<ManualClock>,
    pub clock: ManualClock,
    pub renderer: RecordingRenderer,
    pub notifier: CountingNotifier,
}

/// Machine on a manual clock with recording collaborators
pub fn machine_with(config: TimerConfig) -> TestHarness {
    let clock = ManualClock::new();
    let renderer = RecordingRenderer::default();
    let notifier = CountingNotifier::default();
    let machine = TimerMachine::new(
        config,
        clock.clone(),
        Box::new(renderer.clone()),
        Box::new(notifier.clone()),
    );

    TestHarness {
        machine,
        clock,
        renderer,
        notifier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_moves_only_on_advance() {
        let clock = ManualClock::new();
        let start = clock.now();
        assert_eq!(clock.now(), start);

        clock.advance(Duration::from_millis(1500));
        assert_eq!(clock.now() - start, Duration::from_millis(1500));
    }

    #[test]
    fn test_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let start = clock.now();

        other.advance_secs(10);
        assert_eq!(clock.now() - start, Duration::from_secs(10));
    }
}
