//! Display collaborators for the countdown

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::state::{Action, Controls, Mode, Remaining};

/// Receives every visible change of the timer
pub trait Renderer {
    /// Called on a mode switch, before the countdown starts
    fn render_idle(&mut self, mode: Mode, remaining: Remaining);

    /// Called on every tick while the countdown runs
    fn render_tick(&mut self, mode: Mode, remaining: Remaining);

    /// Called whenever the break counter changes
    fn render_session_count(&mut self, count: u32);

    /// Called whenever the start/pause toggle changes
    fn render_controls(&mut self, _controls: Controls) {}

    /// Called once when the timer shuts down
    fn finish(&mut self) {}
}

/// Single status line redrawn in place, plus the terminal title
pub struct TerminalRenderer<W: Write> {
    out: W,
    mode: Mode,
    remaining: Remaining,
    controls: Controls,
    break_count: u32,
    last_line: Option<String>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            mode: Mode::Focus,
            remaining: Remaining::from_total_seconds(0),
            controls: Controls::default(),
            break_count: 0,
            last_line: None,
        }
    }

    /// Text of the status line for the current view
    pub fn status_line(&self) -> String {
        let clock = self.remaining.clock();
        let body = if self.mode.is_break() {
            format!("Time is up! Take a break and start again after: {}", clock)
        } else if self.controls.toggle_enabled {
            format!("{}  [{}]", clock, self.controls.action.label())
        } else {
            clock
        };

        format!(
            "{} {}  {}  Break counter: {}",
            self.mode.emoji(),
            self.mode.label(),
            body,
            self.break_count
        )
    }

    fn redraw(&mut self) {
        let line = self.status_line();
        if self.last_line.as_deref() == Some(line.as_str()) {
            return;
        }

        let title = format!("Pomodoro - {}", self.remaining.clock());
        let result = write!(self.out, "\x1b]0;{}\x07\r\x1b[2K{}", title, line)
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("Failed to draw status line: {}", e);
        }
        self.last_line = Some(line);
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_idle(&mut self, mode: Mode, remaining: Remaining) {
        self.mode = mode;
        self.remaining = remaining;
        self.redraw();
    }

    fn render_tick(&mut self, mode: Mode, remaining: Remaining) {
        self.mode = mode;
        self.remaining = remaining;
        self.redraw();
    }

    fn render_session_count(&mut self, count: u32) {
        self.break_count = count;
        self.redraw();
    }

    fn render_controls(&mut self, controls: Controls) {
        self.controls = controls;
        self.redraw();
    }

    fn finish(&mut self) {
        if let Err(e) = writeln!(self.out).and_then(|_| self.out.flush()) {
            warn!("Failed to finish status line: {}", e);
        }
    }
}

/// One render event, as written by [`JsonRenderer`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RenderEvent {
    Idle {
        mode: Mode,
        minutes: i64,
        seconds: i64,
        total_seconds: i64,
    },
    Tick {
        mode: Mode,
        minutes: i64,
        seconds: i64,
        total_seconds: i64,
    },
    SessionCount {
        count: u32,
    },
    Controls {
        action: Action,
        toggle_enabled: bool,
    },
}

impl RenderEvent {
    /// JSON object for the event, stamped with `at`
    pub fn to_json(&self, at: DateTime<Utc>) -> serde_json::Result<serde_json::Value> {
        let mut value = serde_json::to_value(self)?;
        if let Some(object) = value.as_object_mut() {
            object.insert("at".to_string(), serde_json::to_value(at)?);
        }
        Ok(value)
    }
}

/// JSON lines on the output, one object per event; meant for status bars
pub struct JsonRenderer<W: Write> {
    out: W,
    last_tick: Option<(Mode, i64)>,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_tick: None,
        }
    }

    fn emit(&mut self, event: RenderEvent) {
        let result = event
            .to_json(Utc::now())
            .map_err(std::io::Error::from)
            .and_then(|line| writeln!(self.out, "{}", line))
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("Failed to write render event: {}", e);
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render_idle(&mut self, mode: Mode, remaining: Remaining) {
        self.last_tick = None;
        self.emit(RenderEvent::Idle {
            mode,
            minutes: remaining.minutes,
            seconds: remaining.seconds,
            total_seconds: remaining.total_seconds,
        });
    }

    fn render_tick(&mut self, mode: Mode, remaining: Remaining) {
        let key = (mode, remaining.total_seconds);
        if self.last_tick == Some(key) {
            return;
        }
        self.last_tick = Some(key);
        self.emit(RenderEvent::Tick {
            mode,
            minutes: remaining.minutes,
            seconds: remaining.seconds,
            total_seconds: remaining.total_seconds,
        });
    }

    fn render_session_count(&mut self, count: u32) {
        self.emit(RenderEvent::SessionCount { count });
    }

    fn render_controls(&mut self, controls: Controls) {
        self.emit(RenderEvent::Controls {
            action: controls.action,
            toggle_enabled: controls.toggle_enabled,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_focus_line_shows_clock_and_action() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render_idle(Mode::Focus, Remaining::full(25));

        assert_eq!(renderer.status_line(), "🍅 Focus  25:00  [Start]  Break counter: 0");
        let out = output(renderer.into_inner());
        assert!(out.contains("\x1b]0;Pomodoro - 25:00\x07"));
        assert!(out.ends_with("25:00  [Start]  Break counter: 0"));
    }

    #[test]
    fn test_break_line_shows_notice() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render_controls(Controls {
            action: Action::Pause,
            toggle_enabled: false,
        });
        renderer.render_session_count(1);
        renderer.render_tick(Mode::ShortBreak, Remaining::from_total_seconds(299));

        assert_eq!(
            renderer.status_line(),
            concat!(
                "☕ Short break  Time is up! Take a break and start again after: 04:59  ",
                "Break counter: 1"
            )
        );
    }

    #[test]
    fn test_terminal_skips_unchanged_redraws() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render_tick(Mode::Focus, Remaining::from_total_seconds(90));
        renderer.render_tick(Mode::Focus, Remaining::from_total_seconds(90));
        renderer.render_tick(Mode::Focus, Remaining::from_total_seconds(90));

        let out = output(renderer.into_inner());
        assert_eq!(out.matches("01:30").count(), 2); // title and line, once
    }

    #[test]
    fn test_json_lines() {
        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.render_idle(Mode::Focus, Remaining::full(1));
        renderer.render_tick(Mode::Focus, Remaining::from_total_seconds(59));
        renderer.render_tick(Mode::Focus, Remaining::from_total_seconds(59));
        renderer.render_session_count(2);
        renderer.render_controls(Controls::default());

        let out = output(renderer.into_inner());
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["event"], "idle");
        assert_eq!(lines[0]["minutes"], 1);
        assert_eq!(lines[1]["event"], "tick");
        assert_eq!(lines[1]["mode"], "focus");
        assert_eq!(lines[1]["seconds"], 59);
        assert_eq!(lines[2]["event"], "session_count");
        assert_eq!(lines[2]["count"], 2);
        assert_eq!(lines[3]["event"], "controls");
        assert_eq!(lines[3]["action"], "start");
        assert_eq!(lines[3]["toggle_enabled"], true);
        assert!(lines[0]["at"].is_string());
    }
}
