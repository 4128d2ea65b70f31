//! Control input task

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
};
use tracing::{debug, error, info, warn};

use crate::controls::Command;

/// Read one command per line and forward it to the countdown task.
///
/// Ends on end of input, after a quit command, or once the countdown task has
/// gone away.
pub async fn control_input_task<R>(reader: R, commands: mpsc::Sender<Command>)
where
    R: AsyncBufRead + Unpin,
{
    info!("Starting control input task");
    let mut lines = reader.lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let command = match line.parse::<Command>() {
                    Ok(command) => command,
                    Err(e) => {
                        warn!("{}", e);
                        continue;
                    }
                };

                if commands.send(command).await.is_err() {
                    debug!("Countdown task gone, dropping {:?}", command);
                    break;
                }
                if command == Command::Quit {
                    break;
                }
            }
            Ok(None) => {
                debug!("Control input reached end of file");
                break;
            }
            Err(e) => {
                error!("Failed to read control input: {}", e);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn collect(input: &'static [u8]) -> Vec<Command> {
        let (tx, mut rx) = mpsc::channel(16);
        control_input_task(input, tx).await;

        let mut received = Vec::new();
        while let Some(command) = rx.recv().await {
            received.push(command);
        }
        received
    }

    #[tokio::test]
    async fn test_forwards_commands_and_skips_garbage() {
        let received = collect(b"\n+10\ncoffee\npause\n").await;
        assert_eq!(
            received,
            vec![Command::Toggle, Command::Extend(10), Command::Pause]
        );
    }

    #[tokio::test]
    async fn test_stops_after_quit() {
        let received = collect(b"s\nq\n+1\n").await;
        assert_eq!(received, vec![Command::Start, Command::Quit]);
    }

    #[tokio::test]
    async fn test_stops_when_receiver_is_gone() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        control_input_task(&b"s\np\n"[..], tx).await;
    }
}
