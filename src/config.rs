//! Configuration and CLI argument handling

use std::{io, time::Duration};

use clap::{builder::RangedU64ValueParser, Parser, ValueEnum};

use crate::{
    services::{
        BellNotifier, DesktopNotifier, JsonRenderer, Notifier, Renderer, SilentNotifier,
        TerminalRenderer,
    },
    state::{TimerConfig, MAX_MINUTES},
};

/// How the countdown is drawn on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Status line redrawn in place
    Text,
    /// One JSON object per event
    Json,
}

/// How a starting break is announced
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NotifyKind {
    Bell,
    Desktop,
    None,
}

/// Interval lengths from 1 minute up to a full day
fn minutes() -> RangedU64ValueParser<u64> {
    RangedU64ValueParser::new().range(1..=MAX_MINUTES)
}

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "tomato-clock")]
#[command(about = "A terminal pomodoro timer with automatic breaks")]
#[command(version)]
pub struct Config {
    /// Focus interval in minutes
    #[arg(long, default_value = "25", value_parser = minutes())]
    pub focus: u64,

    /// Short break in minutes
    #[arg(long, default_value = "5", value_parser = minutes())]
    pub short_break: u64,

    /// Long break in minutes
    #[arg(long, default_value = "15", value_parser = minutes())]
    pub long_break: u64,

    /// Focus sessions between long breaks
    #[arg(long, default_value = "4", value_parser = clap::value_parser!(u32).range(1..))]
    pub long_break_interval: u32,

    /// Start the next focus interval as soon as a break ends
    #[arg(long)]
    pub auto_start_focus: bool,

    /// Count a focus session only on a fresh start, not on resume after a pause
    #[arg(long)]
    pub no_count_resumes: bool,

    /// Start the first focus interval right away
    #[arg(short, long)]
    pub start: bool,

    /// Tick period in milliseconds
    #[arg(long, default_value = "200", value_parser = clap::value_parser!(u64).range(10..=1000))]
    pub tick_ms: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Break notification
    #[arg(short, long, value_enum, default_value_t = NotifyKind::Bell)]
    pub notify: NotifyKind,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Interval lengths and policy for the timer machine
    pub fn timer_config(&self) -> TimerConfig {
        TimerConfig::new(
            self.focus,
            self.short_break,
            self.long_break,
            self.long_break_interval,
        )
        .with_auto_start_focus(self.auto_start_focus)
        .with_count_resumes(!self.no_count_resumes)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Renderer drawing to stdout
    pub fn renderer(&self) -> Box<dyn Renderer + Send> {
        match self.format {
            OutputFormat::Text => Box::new(TerminalRenderer::new(io::stdout())),
            OutputFormat::Json => Box::new(JsonRenderer::new(io::stdout())),
        }
    }

    /// Notifier; the bell goes to stderr so stdout stays clean for JSON
    pub fn notifier(&self) -> Box<dyn Notifier + Send> {
        match self.notify {
            NotifyKind::Bell => Box::new(BellNotifier::new(io::stderr())),
            NotifyKind::Desktop => Box::new(DesktopNotifier::new(io::stderr())),
            NotifyKind::None => Box::new(SilentNotifier),
        }
    }
}
