//! Countdown scheduler task

use std::{future::Future, time::Duration};
use tokio::{
    sync::mpsc,
    time::{self, Interval, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::{
    controls::{handle_command, Command, Flow},
    state::{TickOutcome, TimerMachine},
    utils::Clock,
};

/// Periodic tick bound to one schedule of the machine
struct Ticker {
    schedule: u64,
    interval: Interval,
}

impl Ticker {
    fn new(schedule: u64, period: Duration) -> Self {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { schedule, interval }
    }
}

/// Bring the ticker slot in line with the machine's current schedule.
///
/// The slot holds at most one ticker; a superseded one is dropped, which
/// cancels it, before its replacement is stored.
fn sync_ticker(slot: &mut Option<Ticker>, schedule: Option<u64>, period: Duration) {
    match schedule {
        None => {
            if let Some(old) = slot.take() {
                debug!("Stopped ticking for schedule {}", old.schedule);
            }
        }
        Some(id) if slot.as_ref().is_some_and(|ticker| ticker.schedule == id) => {}
        Some(id) => {
            if let Some(old) = slot.take() {
                debug!("Replacing ticker for schedule {} with {}", old.schedule, id);
            }
            *slot = Some(Ticker::new(id, period));
        }
    }
}

async fn next_tick(slot: &mut Option<Ticker>) {
    match slot {
        Some(ticker) => {
            ticker.interval.tick().await;
        }
        None => futures::future::pending().await,
    }
}

/// Drive the machine until a quit command or `shutdown` resolves.
///
/// Ticks every `period` while the machine has an open schedule and applies
/// commands as they arrive. Returns the machine for a final report.
pub async fn countdown_task<C, F>(
    mut machine: TimerMachine<C>,
    mut commands: mpsc::Receiver<Command>,
    period: Duration,
    shutdown: F,
) -> TimerMachine<C>
where
    C: Clock,
    F: Future<Output = ()>,
{
    info!("Starting countdown task (tick every {}ms)", period.as_millis());

    tokio::pin!(shutdown);
    let mut ticker: Option<Ticker> = None;
    let mut commands_open = true;
    sync_ticker(&mut ticker, machine.schedule(), period);

    loop {
        tokio::select! {
            // Countdown tick - recompute remaining time
            _ = next_tick(&mut ticker) => {
                if let TickOutcome::Expired { from, to } = machine.tick() {
                    debug!("Transition {} -> {}", from, to);
                }
            }

            // User command
            command = commands.recv(), if commands_open => {
                match command {
                    Some(command) => {
                        if handle_command(&mut machine, command) == Flow::Quit {
                            break;
                        }
                    }
                    None => {
                        debug!("Control input closed, countdown continues without controls");
                        commands_open = false;
                    }
                }
            }

            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
        }

        sync_ticker(&mut ticker, machine.schedule(), period);
    }

    machine.finish();
    info!("Countdown task stopped");
    machine
}
