//! Commands typed on the control input

use std::str::FromStr;

use crate::state::MAX_MINUTES;

/// One user action on the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start, pause or resume depending on the toggle
    Toggle,
    Start,
    Pause,
    /// Lengthen the next focus interval by this many minutes
    Extend(u64),
    Restart,
    Quit,
    Help,
}

pub const HELP: &str = "\
Controls (press Enter after each):
  <Enter>, p    start / pause / resume
  s             start or resume
  pause         pause the focus interval
  +1, +10, +N   add N minutes to the next focus (during a break)
  r             restart everything
  q             quit
  ?             show this help";

impl FromStr for Command {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim().to_lowercase();

        if let Some(minutes) = input.strip_prefix('+') {
            return parse_minutes(minutes).map(Command::Extend);
        }
        if let Some(minutes) = input.strip_prefix("extend") {
            return parse_minutes(minutes).map(Command::Extend);
        }

        match input.as_str() {
            "" | "p" | "toggle" => Ok(Command::Toggle),
            "s" | "start" | "resume" => Ok(Command::Start),
            "pause" | "stop" => Ok(Command::Pause),
            "r" | "restart" => Ok(Command::Restart),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            "?" | "h" | "help" => Ok(Command::Help),
            other => Err(format!("Unknown command: {:?} (type ? for help)", other)),
        }
    }
}

fn parse_minutes(input: &str) -> Result<u64, String> {
    let input = input.trim();
    match input.parse::<u64>() {
        Ok(minutes @ 1..=MAX_MINUTES) => Ok(minutes),
        Ok(_) => Err(format!(
            "Extension must be between 1 and {} minutes",
            MAX_MINUTES
        )),
        Err(_) => Err(format!("Invalid number of minutes: {:?}", input)),
    }
}
