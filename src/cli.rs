use crate::game::{Game, GameEnd, GuessResult, LetterScore};
use crate::wordbank::WordBank;
use clap::Parser;
use std::io::BufRead;

/// Wordle game CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word bank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Use the plain line-oriented interface instead of the full-screen TUI
    #[arg(long)]
    pub plain: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

enum GuessInput {
    Guess(String),
    Exit,
    NewGame,
}

fn marker(score: LetterScore) -> char {
    match score {
        LetterScore::Exact => 'G',
        LetterScore::Present => 'Y',
        LetterScore::Absent => 'X',
    }
}

/// Run the plain terminal front end against a fresh game.
pub fn game_loop<R: BufRead>(bank: &WordBank, reader: R) {
    game_loop_from(Game::new(bank), bank, reader);
}

/// Same loop, but starting from a caller-supplied game. Tests use this to
/// play against a known target.
pub fn game_loop_from<R: BufRead>(mut game: Game, bank: &WordBank, mut reader: R) {
    println!("Loaded {} words. Score: {}", bank.len(), game.score());

    loop {
        let text = match read_guess(&mut reader) {
            GuessInput::Exit => {
                println!("Exiting.");
                break;
            }
            GuessInput::NewGame => {
                game.restart(bank);
                println!("New game started. Score: {}", game.score());
                continue;
            }
            GuessInput::Guess(text) => text,
        };

        match game.submit_guess(&text) {
            Ok(accepted) => {
                display_row(&game.rows()[accepted.row].guess, &accepted.result);
                println!("Score: {}", game.score());
                if let Some(end) = &accepted.ended {
                    display_game_end(end);
                }
            }
            Err(e) => println!("{e}"),
        }
    }
}

fn read_guess<R: BufRead>(reader: &mut R) -> GuessInput {
    println!("\nEnter your guess (5 letters, or 'exit' to quit, or 'next' to restart):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return GuessInput::Exit,
        Ok(_) => {}
    }
    let input = input.trim().to_uppercase();

    match input.as_str() {
        "EXIT" => GuessInput::Exit,
        "NEXT" => GuessInput::NewGame,
        _ => GuessInput::Guess(input),
    }
}

fn display_row(guess: &str, result: &GuessResult) {
    let letters: Vec<String> = guess.chars().map(|c| format!(" {c} ")).collect();
    let markers: Vec<String> = result.iter().map(|s| format!(" {} ", marker(*s))).collect();
    println!("{}", letters.join(""));
    println!("{}", markers.join(""));
}

fn display_game_end(end: &GameEnd) {
    if end.won {
        println!("Congratulations! You guessed the word!");
    } else {
        println!("Game Over! The word was: {}", end.target);
    }
    println!("Enter 'next' to play again or 'exit' to quit.");
}
