use crate::wordbank::WordBank;
use std::fmt;

pub const WORD_LENGTH: usize = 5;
pub const MAX_ROWS: usize = 6;
pub const ROW_SCORE: u32 = 50;

/// Per-letter outcome of an evaluated guess.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LetterScore {
    /// Right letter, right position (green).
    Exact,
    /// Letter occurs somewhere else in the target (yellow).
    Present,
    /// Letter does not occur in the target (red).
    Absent,
}

pub type GuessResult = [LetterScore; WORD_LENGTH];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Why a submission was turned away. Neither variant mutates any game state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitError {
    /// Wrong length or a non-letter character.
    InvalidGuess,
    /// The game already ended; restart before guessing again.
    GameFinished,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess => write!(f, "Invalid guess! Enter a 5-letter word."),
            Self::GameFinished => write!(f, "The game is over. Start a new game to keep playing."),
        }
    }
}

impl std::error::Error for SubmitError {}

/// One evaluated row, kept for rendering.
#[derive(Clone, Debug)]
pub struct RowEntry {
    pub guess: String,
    pub result: GuessResult,
}

/// Outcome of an accepted guess.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Accepted {
    /// Index of the row this guess occupied.
    pub row: usize,
    pub result: GuessResult,
    pub score_delta: u32,
    /// Set when this guess ended the game.
    pub ended: Option<GameEnd>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameEnd {
    pub won: bool,
    pub target: String,
}

pub fn is_valid_guess(guess: &str) -> bool {
    guess.len() == WORD_LENGTH && guess.bytes().all(|b| b.is_ascii_uppercase())
}

/// Classify each guess letter against the target.
///
/// Membership for `Present` is tested against the whole target without
/// decrementing matched letters, so duplicate letters in the guess can each
/// register `Present` even when the target holds only one occurrence.
pub fn evaluate(target: &str, guess: &str) -> GuessResult {
    let mut result = [LetterScore::Absent; WORD_LENGTH];
    for (i, (g, t)) in guess.chars().zip(target.chars()).enumerate() {
        result[i] = if g == t {
            LetterScore::Exact
        } else if target.contains(g) {
            LetterScore::Present
        } else {
            LetterScore::Absent
        };
    }
    result
}

/// One game: target word, row counter, score, and the evaluated rows.
///
/// The score carries across restarts; everything else is reset.
#[derive(Clone, Debug)]
pub struct Game {
    target: String,
    row: usize,
    score: u32,
    status: GameStatus,
    rows: Vec<RowEntry>,
}

impl Game {
    pub fn new(bank: &WordBank) -> Self {
        Self::with_target(bank.random_word().to_string())
    }

    /// Start a game against a known target. Used by tests and by `new`.
    pub fn with_target(target: String) -> Self {
        Self {
            target,
            row: 0,
            score: 0,
            status: GameStatus::Playing,
            rows: Vec::new(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn current_row(&self) -> usize {
        self.row
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn rows(&self) -> &[RowEntry] {
        &self.rows
    }

    /// Validate, evaluate, and score one guess.
    ///
    /// Raw input is trimmed and uppercased before validation. A full match
    /// wins and leaves the row counter where it is; any other accepted guess
    /// advances it, and the sixth consumed row loses the game. A row whose
    /// letters are all `Exact` or `Present` scores 50 even when the word is
    /// wrong; that mirrors the original game's bookkeeping and is kept as is.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Accepted, SubmitError> {
        if self.status != GameStatus::Playing {
            return Err(SubmitError::GameFinished);
        }
        let guess = raw.trim().to_uppercase();
        if !is_valid_guess(&guess) {
            return Err(SubmitError::InvalidGuess);
        }

        let result = evaluate(&self.target, &guess);
        let row = self.row;
        let won = guess == self.target;
        let no_absent = result.iter().all(|s| *s != LetterScore::Absent);

        let mut score_delta = 0;
        if won {
            score_delta += ROW_SCORE;
            self.status = GameStatus::Won;
        } else {
            if no_absent {
                score_delta += ROW_SCORE;
            }
            self.row += 1;
            if self.row == MAX_ROWS {
                self.status = GameStatus::Lost;
            }
        }
        self.score += score_delta;
        self.rows.push(RowEntry { guess, result });

        let ended = match self.status {
            GameStatus::Playing => None,
            GameStatus::Won => Some(GameEnd {
                won: true,
                target: self.target.clone(),
            }),
            GameStatus::Lost => Some(GameEnd {
                won: false,
                target: self.target.clone(),
            }),
        };

        Ok(Accepted {
            row,
            result,
            score_delta,
            ended,
        })
    }

    /// Fresh target, row 0, empty board. The score is not reset.
    pub fn restart(&mut self, bank: &WordBank) {
        self.target = bank.random_word().to_string();
        self.row = 0;
        self.status = GameStatus::Playing;
        self.rows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterScore::{Absent, Exact, Present};

    #[test]
    fn test_is_valid_guess() {
        assert!(is_valid_guess("APPLE"));
        assert!(is_valid_guess("ZZZZZ"));
        assert!(!is_valid_guess("APPL")); // Too short
        assert!(!is_valid_guess("APPLES")); // Too long
        assert!(!is_valid_guess("APPL3")); // Digit
        assert!(!is_valid_guess("APPL ")); // Space
        assert!(!is_valid_guess("apple")); // Lowercase rejected by the predicate
        assert!(!is_valid_guess(""));
    }

    #[test]
    fn test_evaluate_full_match() {
        assert_eq!(evaluate("APPLE", "APPLE"), [Exact; 5]);
    }

    #[test]
    fn test_evaluate_present_and_absent() {
        // P and L occur in APPLE but not at these positions; U, C, K do not.
        assert_eq!(
            evaluate("APPLE", "PLUCK"),
            [Present, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn test_evaluate_mostly_absent() {
        assert_eq!(
            evaluate("HOUSE", "WATER"),
            [Absent, Absent, Absent, Present, Absent]
        );
    }

    #[test]
    fn test_evaluate_duplicate_letters_not_decremented() {
        // HOUSE has a single E, yet every E in the guess registers.
        assert_eq!(
            evaluate("HOUSE", "EEEEE"),
            [Present, Present, Present, Present, Exact]
        );
    }

    #[test]
    fn test_exact_beats_present() {
        let result = evaluate("APPLE", "ALPHA");
        assert_eq!(result[0], Exact);
        assert_eq!(result[1], Present); // L is in APPLE, wrong spot
        assert_eq!(result[2], Exact); // P at index 2
    }

    #[test]
    fn test_winning_guess_scores_and_ends_game() {
        let mut game = Game::with_target("APPLE".to_string());
        let accepted = game.submit_guess("APPLE").unwrap();
        assert_eq!(accepted.result, [Exact; 5]);
        assert_eq!(accepted.score_delta, ROW_SCORE);
        let end = accepted.ended.expect("win should end the game");
        assert!(end.won);
        assert_eq!(end.target, "APPLE");
        assert_eq!(game.score(), 50);
        assert_eq!(game.status(), GameStatus::Won);
        // The original returns before the row increment on a win.
        assert_eq!(game.current_row(), 0);
        assert_eq!(game.rows().len(), 1);
    }

    #[test]
    fn test_win_scores_exactly_once() {
        // A full match also has no Absent letters; the bonus branch must not
        // fire a second time.
        let mut game = Game::with_target("HOUSE".to_string());
        let accepted = game.submit_guess("HOUSE").unwrap();
        assert_eq!(accepted.score_delta, ROW_SCORE);
        assert_eq!(game.score(), ROW_SCORE);
    }

    #[test]
    fn test_all_present_wrong_word_scores_and_continues() {
        // Every letter of PAPEL is somewhere in APPLE, but the word is wrong:
        // 50 points, game goes on. Original behavior, preserved on purpose.
        let mut game = Game::with_target("APPLE".to_string());
        let accepted = game.submit_guess("PAPEL").unwrap();
        assert!(accepted.result.iter().all(|s| *s != Absent));
        assert_eq!(accepted.score_delta, ROW_SCORE);
        assert!(accepted.ended.is_none());
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.current_row(), 1);
    }

    #[test]
    fn test_ordinary_miss_scores_nothing() {
        let mut game = Game::with_target("HOUSE".to_string());
        let accepted = game.submit_guess("WATER").unwrap();
        assert_eq!(accepted.score_delta, 0);
        assert_eq!(game.score(), 0);
        assert_eq!(game.current_row(), 1);
    }

    #[test]
    fn test_row_advances_per_accepted_guess() {
        let mut game = Game::with_target("HOUSE".to_string());
        for expected in 1..=3 {
            game.submit_guess("WATER").unwrap();
            assert_eq!(game.current_row(), expected);
        }
    }

    #[test]
    fn test_sixth_miss_loses_and_reveals_target() {
        let mut game = Game::with_target("HOUSE".to_string());
        for _ in 0..5 {
            assert!(game.submit_guess("WATER").unwrap().ended.is_none());
        }
        let accepted = game.submit_guess("WATER").unwrap();
        let end = accepted.ended.expect("sixth miss should end the game");
        assert!(!end.won);
        assert_eq!(end.target, "HOUSE");
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.current_row(), MAX_ROWS);
    }

    #[test]
    fn test_submission_after_game_over_is_rejected() {
        let mut game = Game::with_target("HOUSE".to_string());
        for _ in 0..6 {
            game.submit_guess("WATER").unwrap();
        }
        let score = game.score();
        assert_eq!(game.submit_guess("HOUSE"), Err(SubmitError::GameFinished));
        assert_eq!(game.score(), score);
        assert_eq!(game.current_row(), MAX_ROWS);
        assert_eq!(game.rows().len(), 6);
    }

    #[test]
    fn test_submission_after_win_is_rejected() {
        let mut game = Game::with_target("APPLE".to_string());
        game.submit_guess("APPLE").unwrap();
        assert_eq!(game.submit_guess("APPLE"), Err(SubmitError::GameFinished));
        assert_eq!(game.score(), 50);
    }

    #[test]
    fn test_submission_outcomes_compare_as_values() {
        // Identical games produce equal outcomes, Ok and Err alike.
        let mut a = Game::with_target("APPLE".to_string());
        let mut b = Game::with_target("APPLE".to_string());
        assert_eq!(a.submit_guess("PLUCK"), b.submit_guess("PLUCK"));
        assert_eq!(a.submit_guess("APPLE"), b.submit_guess("APPLE"));
        assert_eq!(a.submit_guess("HOUSE"), Err(SubmitError::GameFinished));
        assert_eq!(
            a.rows().last().map(|r| r.guess.as_str()),
            Some("APPLE")
        );
    }

    #[test]
    fn test_invalid_guess_leaves_state_untouched() {
        let mut game = Game::with_target("APPLE".to_string());
        for bad in ["CRAN", "CRANES", "CR4NE", "CRAN!", ""] {
            assert_eq!(game.submit_guess(bad), Err(SubmitError::InvalidGuess));
        }
        assert_eq!(game.current_row(), 0);
        assert_eq!(game.score(), 0);
        assert_eq!(game.target(), "APPLE");
        assert!(game.rows().is_empty());
    }

    #[test]
    fn test_lowercase_input_is_uppercased_before_validation() {
        let mut game = Game::with_target("APPLE".to_string());
        let accepted = game.submit_guess("  apple \n").unwrap();
        assert_eq!(accepted.result, [Exact; 5]);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn test_restart_keeps_score_resets_board() {
        let bank = WordBank::embedded();
        let mut game = Game::with_target("APPLE".to_string());
        game.submit_guess("APPLE").unwrap();
        assert_eq!(game.score(), 50);

        game.restart(&bank);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.current_row(), 0);
        assert!(game.rows().is_empty());
        assert_eq!(game.score(), 50); // Score survives the restart
        assert!(bank.contains(game.target()));
    }
}
