//! Tomato Clock - a terminal pomodoro timer
//!
//! This is the main entry point for the tomato-clock application.

use tokio::{io::BufReader, runtime::Runtime, sync::mpsc};
use tracing::info;

use tomato_clock::{
    config::{Config, OutputFormat},
    controls::HELP,
    state::TimerMachine,
    tasks::{control_input_task, countdown_task},
    utils::{shutdown_signal, SystemClock},
};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr, stdout is the display
    tracing_subscriber::fmt()
        .with_env_filter(format!("tomato_clock={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tomato-clock v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: focus={}min, short_break={}min, long_break={}min, long_break_interval={}",
        config.focus, config.short_break, config.long_break, config.long_break_interval
    );
    if config.format == OutputFormat::Text {
        eprintln!("{}", HELP);
    }

    let runtime = Runtime::new()?;
    runtime.block_on(run(config));

    // The stdin reader may still be parked on a blocking read
    runtime.shutdown_background();
    Ok(())
}

async fn run(config: Config) {
    let mut machine = TimerMachine::new(
        config.timer_config(),
        SystemClock,
        config.renderer(),
        config.notifier(),
    );
    if config.start {
        machine.start();
    }

    let (command_tx, command_rx) = mpsc::channel(32);
    tokio::spawn(control_input_task(
        BufReader::new(tokio::io::stdin()),
        command_tx,
    ));

    let machine = countdown_task(
        machine,
        command_rx,
        config.tick_period(),
        shutdown_signal(),
    )
    .await;

    info!(
        "Finished with {} focus sessions and {} breaks",
        machine.completed_focus_sessions(),
        machine.break_count()
    );
}
