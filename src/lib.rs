// Library interface for wordle-game
// This allows integration tests to access internal modules

pub mod cli;
pub mod game;
pub mod logging;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use cli::{game_loop, game_loop_from};
pub use game::{
    Accepted, Game, GameEnd, GameStatus, GuessResult, LetterScore, MAX_ROWS, ROW_SCORE,
    SubmitError, WORD_LENGTH, evaluate, is_valid_guess,
};
pub use wordbank::WordBank;
