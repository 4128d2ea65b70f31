//! Timer modes and the next-mode policy

use serde::Serialize;

/// Which interval is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl Mode {
    /// Pick the mode that follows `self` once it expires.
    ///
    /// A focus interval is followed by a long break whenever the number of
    /// completed focus sessions is a multiple of `long_break_interval`, and by
    /// a short break otherwise. Breaks always return to focus.
    pub fn next(self, completed_focus_sessions: u32, long_break_interval: u32) -> Mode {
        match self {
            Mode::Focus => {
                if long_break_interval > 0 && completed_focus_sessions % long_break_interval == 0 {
                    Mode::LongBreak
                } else {
                    Mode::ShortBreak
                }
            }
            Mode::ShortBreak | Mode::LongBreak => Mode::Focus,
        }
    }

    pub fn is_break(self) -> bool {
        !matches!(self, Mode::Focus)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Focus => "focus",
            Mode::ShortBreak => "short_break",
            Mode::LongBreak => "long_break",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Focus => "Focus",
            Mode::ShortBreak => "Short break",
            Mode::LongBreak => "Long break",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mode::Focus => "🍅",
            Mode::ShortBreak => "☕",
            Mode::LongBreak => "🌴",
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Focus
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
