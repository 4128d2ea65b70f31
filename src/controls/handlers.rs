//! Command handlers

use tracing::{debug, info};

use super::commands::{Command, HELP};
use crate::{state::TimerMachine, utils::Clock};

/// Whether the countdown loop should keep going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one command to the machine
pub fn handle_command<C: Clock>(machine: &mut TimerMachine<C>, command: Command) -> Flow {
    debug!("Handling command {:?}", command);

    match command {
        Command::Toggle => {
            machine.toggle();
        }
        Command::Start => {
            machine.start();
        }
        Command::Pause => {
            machine.stop();
        }
        Command::Extend(minutes) => {
            if !machine.extend(minutes) {
                info!("Extensions only apply while a break is running");
            }
        }
        Command::Restart => machine.restart(),
        Command::Help => eprintln!("\n{}", HELP),
        Command::Quit => {
            info!("Quit requested");
            return Flow::Quit;
        }
    }

    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        state::{Mode, TimerConfig},
        test_support::machine_with,
    };

    #[test]
    fn test_quit_stops_the_loop() {
        let mut harness = machine_with(TimerConfig::default());
        assert_eq!(handle_command(&mut harness.machine, Command::Quit), Flow::Quit);
        assert_eq!(handle_command(&mut harness.machine, Command::Help), Flow::Continue);
    }

    #[test]
    fn test_commands_reach_the_machine() {
        let mut harness = machine_with(TimerConfig::new(1, 1, 1, 4));
        let machine = &mut harness.machine;

        handle_command(machine, Command::Toggle);
        assert!(machine.is_running());
        handle_command(machine, Command::Pause);
        assert!(!machine.is_running());
        handle_command(machine, Command::Start);
        assert!(machine.is_running());

        handle_command(machine, Command::Extend(10));
        assert_eq!(machine.config().focus, 1);

        harness.clock.advance_secs(60);
        machine.tick();
        assert_eq!(machine.mode(), Mode::ShortBreak);
        handle_command(machine, Command::Extend(10));
        assert_eq!(machine.config().focus, 11);

        handle_command(machine, Command::Restart);
        assert_eq!(machine.mode(), Mode::Focus);
        assert_eq!(machine.config().focus, 1);
    }
}
