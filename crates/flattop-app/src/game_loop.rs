//! Fixed-rate game loop — advances the simulation at 30Hz and writes one
//! JSON snapshot line per tick.
//!
//! Commands arrive via `mpsc` channel from the reader thread. Shutdown
//! takes effect after the tick that drained it, so the final state is
//! still reported before teardown.

use std::io::Write;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use flattop_core::commands::InputCommand;
use flattop_core::constants::{DT, TICK_RATE};
use flattop_sim::frontend::RecordingFrontend;
use flattop_sim::Simulation;

use crate::reader::HostCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Apply one input command to the simulation.
pub fn apply_command(sim: &mut Simulation<RecordingFrontend>, command: InputCommand) {
    match command {
        InputCommand::KeyPressed { key } => sim.key_pressed(key),
        InputCommand::KeyReleased { key } => sim.key_released(key),
        InputCommand::Click { x, y, button } => sim.click(x, y, button),
        // Quit never reaches the loop; the reader folds it into Shutdown.
        InputCommand::Quit => {}
    }
}

/// The game loop. Runs until a `Shutdown` command or channel disconnect.
pub fn run_game_loop<W: Write>(cmd_rx: mpsc::Receiver<HostCommand>, mut out: W) {
    let mut sim = Simulation::new(RecordingFrontend::new());
    sim.init();

    let mut next_tick_time = Instant::now();
    loop {
        // 1. Drain all pending commands.
        let mut shutdown = false;
        loop {
            match cmd_rx.try_recv() {
                Ok(HostCommand::Input(command)) => apply_command(&mut sim, command),
                Ok(HostCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    shutdown = true;
                    break;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick and report it.
        let snapshot = sim.tick(DT);
        if emit(&mut out, &snapshot).is_err() {
            // Downstream closed the pipe; nothing left to report to.
            shutdown = true;
        }

        if shutdown {
            sim.deinit();
            return;
        }

        // 3. Sleep until the next tick boundary.
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral.
            next_tick_time = now;
        }
    }
}

fn emit<W: Write>(out: &mut W, snapshot: &flattop_core::state::SimSnapshot) -> std::io::Result<()> {
    serde_json::to_writer(&mut *out, snapshot)?;
    out.write_all(b"\n")?;
    out.flush()
}
