use std::io::{self, BufReader};

use flattop_app::{game_loop, reader};

fn main() {
    let commands = reader::spawn_reader(BufReader::new(io::stdin()));
    game_loop::run_game_loop(commands, io::stdout().lock());
}
