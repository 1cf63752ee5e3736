//! Stdin reader thread — turns JSON lines into host commands.
//!
//! Runs for the life of the process. Each line is one `InputCommand`;
//! malformed lines are reported on stderr and skipped. EOF or an explicit
//! `Quit` ends the stream with a shutdown.

use std::io::BufRead;
use std::sync::mpsc;

use flattop_core::commands::InputCommand;

/// What the game loop receives from the reader.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    Input(InputCommand),
    Shutdown,
}

/// Parse one input line into a host command.
pub fn parse_line(line: &str) -> Result<HostCommand, serde_json::Error> {
    let command: InputCommand = serde_json::from_str(line)?;
    Ok(match command {
        InputCommand::Quit => HostCommand::Shutdown,
        other => HostCommand::Input(other),
    })
}

/// Spawns the reader thread over `input`.
///
/// Returns the receiving end for the game loop. The thread exits after
/// sending `Shutdown` (EOF, `Quit`, or a dropped receiver).
pub fn spawn_reader<R>(input: R) -> mpsc::Receiver<HostCommand>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    std::thread::Builder::new()
        .name("flattop-stdin-reader".into())
        .spawn(move || {
            for line in input.lines() {
                let Ok(line) = line else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_line(&line) {
                    Ok(HostCommand::Shutdown) => {
                        let _ = tx.send(HostCommand::Shutdown);
                        return;
                    }
                    Ok(command) => {
                        if tx.send(command).is_err() {
                            return;
                        }
                    }
                    Err(err) => {
                        eprintln!("flattop: ignoring malformed command: {err}");
                    }
                }
            }
            let _ = tx.send(HostCommand::Shutdown);
        })
        .expect("failed to spawn stdin reader thread");

    rx
}
