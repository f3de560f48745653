mod cli;
mod game;
mod logging;
mod tui;
mod wordbank;

use cli::parse_cli;
use std::io;
use wordbank::WordBank;

fn main() {
    env_logger::init();
    let cli = parse_cli();

    let bank = match &cli.wordbank_path {
        Some(path) => match WordBank::from_file(path) {
            Ok(bank) => bank,
            Err(e) => {
                eprintln!("Failed to load word bank from '{path}': {e}");
                return;
            }
        },
        None => WordBank::embedded(),
    };

    if cli.plain {
        cli::game_loop(&bank, io::stdin().lock());
    } else if let Err(e) = tui::run(bank) {
        eprintln!("Terminal error: {e}");
    }
}
