//! Full-screen terminal front end built on Ratatui.
//!
//! Renders the 6x5 tile board straight from the game core and feeds key
//! events back into it. The core owns every rule; this module only draws
//! and collects input.

use crate::game::{Game, GameStatus, LetterScore, MAX_ROWS, WORD_LENGTH};
use crate::wordbank::WordBank;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

/// Background and foreground for one evaluated tile.
fn tile_colors(score: LetterScore) -> (Color, Color) {
    match score {
        LetterScore::Exact => (Color::Green, Color::Black),
        LetterScore::Present => (Color::Yellow, Color::Black),
        // The original game paints misses red rather than gray.
        LetterScore::Absent => (Color::Red, Color::White),
    }
}

enum Action {
    Exit,
}

pub struct GameTui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    game: Game,
    bank: WordBank,
    current_input: String,
    message: String,
    error_message: String,
    status: String,
}

/// Run the TUI until the player quits.
pub fn run(bank: WordBank) -> Result<(), io::Error> {
    let mut tui = GameTui::new(bank)?;
    let result = tui.event_loop();
    tui.cleanup()?;
    result
}

impl GameTui {
    pub fn new(bank: WordBank) -> Result<Self, io::Error> {
        info_log!("GameTui::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        let game = Game::new(&bank);
        Ok(Self {
            terminal,
            game,
            bank,
            current_input: String::new(),
            message: String::new(),
            error_message: String::new(),
            status: "Enter your first 5-letter guess".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn event_loop(&mut self) -> Result<(), io::Error> {
        loop {
            self.draw()?;
            if let Some(Action::Exit) = self.handle_input()? {
                info_log!("event_loop() - Exit requested");
                return Ok(());
            }
        }
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let game = &self.game;
        let current_input = &self.current_input;
        let message = &self.message;
        let error_message = &self.error_message;
        let status = &self.status;
        self.terminal.draw(|f| {
            Self::render(f, game, current_input, message, error_message, status);
        })?;
        Ok(())
    }

    fn render(
        f: &mut Frame,
        game: &Game,
        current_input: &str,
        message: &str,
        error_message: &str,
        status: &str,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                           // Title + score
                Constraint::Length(MAX_ROWS as u16 * ROW_SPACING + 2), // Board
                Constraint::Min(4),                              // Messages
                Constraint::Length(3),                           // Status line
                Constraint::Length(3),                           // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], game.score());
        Self::render_board(f, chunks[1], game, current_input);
        Self::render_messages(f, chunks[2], message, error_message);
        Self::render_status(f, chunks[3], status);
        Self::render_instructions(f, chunks[4], game.status());
    }

    fn render_title(f: &mut Frame, area: Rect, score: u32) {
        let title = Paragraph::new(format!("WORDLE  |  Score: {score}"))
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, game: &Game, current_input: &str) {
        let block = Block::default().title("Guesses").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = game.rows();
        let input_row = if game.status() == GameStatus::Playing {
            Some(rows.len())
        } else {
            None
        };

        for board_row in 0..MAX_ROWS {
            let mut spans = vec![Span::raw("  ")];
            if let Some(entry) = rows.get(board_row) {
                for (letter, score) in entry.guess.chars().zip(entry.result.iter()) {
                    let (bg, fg) = tile_colors(*score);
                    spans.push(Span::styled(
                        format!(" {letter} "),
                        Style::default().fg(fg).bg(bg),
                    ));
                    spans.push(Span::raw(" "));
                }
            } else {
                let typing = input_row == Some(board_row);
                for i in 0..WORD_LENGTH {
                    let letter = if typing {
                        current_input.chars().nth(i).unwrap_or(' ')
                    } else {
                        ' '
                    };
                    spans.push(Span::styled(
                        format!(" {letter} "),
                        Style::default().fg(Color::White).bg(Color::DarkGray),
                    ));
                    spans.push(Span::raw(" "));
                }
            }
            Self::render_line(f, inner, board_row as u16 * ROW_SPACING, spans);
        }
    }

    fn render_line(f: &mut Frame, area: Rect, y_offset: u16, spans: Vec<Span>) {
        let y = area.y + y_offset;
        if y >= area.y + area.height {
            return;
        }
        let paragraph = Paragraph::new(Line::from(spans));
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_messages(f: &mut Frame, area: Rect, message: &str, error_message: &str) {
        let mut lines = Vec::new();
        if !message.is_empty() {
            let style = if message.starts_with("Congratulations") {
                SUCCESS_STYLE
            } else {
                MESSAGE_STYLE
            };
            lines.push(Line::from(vec![Span::styled(message, style)]));
        }
        if !error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
        }
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Messages").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, status: GameStatus) {
        let text = match status {
            GameStatus::Playing => "Type your 5-letter guess | ENTER: Submit | ESC: Quit",
            GameStatus::Won | GameStatus::Lost => "N: New Game | ESC: Quit",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<Action>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let event = event::read()?;
        let Event::Key(key) = event else {
            debug_log!("handle_input() - Ignoring non-key event: {:?}", event);
            return Ok(None);
        };
        // Only react to presses; releases and repeats would double up input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }
        if Self::has_modifier_keys(&key) {
            debug_log!(
                "handle_input() - Ignoring input with modifier: {:?}",
                key.modifiers
            );
            return Ok(None);
        }

        match self.game.status() {
            GameStatus::Playing => Ok(self.handle_guess_input(key)),
            GameStatus::Won | GameStatus::Lost => Ok(self.handle_game_over_input(key)),
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() && self.current_input.len() < WORD_LENGTH => {
                self.error_message.clear();
                self.current_input.push(c.to_ascii_uppercase());
                debug_log!("handle_guess_input() - Input now: '{}'", self.current_input);
            }
            KeyCode::Backspace if !self.current_input.is_empty() => {
                self.current_input.pop();
            }
            KeyCode::Enter => self.submit_current_input(),
            KeyCode::Esc => {
                info_log!("handle_guess_input() - ESC pressed, exiting");
                return Some(Action::Exit);
            }
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            _ => {
                debug_log!("handle_guess_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn submit_current_input(&mut self) {
        let guess = self.current_input.clone();
        match self.game.submit_guess(&guess) {
            Ok(accepted) => {
                info_log!(
                    "submit_current_input() - Accepted '{}' on row {}",
                    guess,
                    accepted.row
                );
                self.current_input.clear();
                self.error_message.clear();
                if accepted.score_delta > 0 {
                    self.status = format!("+{} points! Score: {}", accepted.score_delta, self.game.score());
                } else {
                    self.status = format!("Row {} of {}", self.game.current_row(), MAX_ROWS);
                }
                if let Some(end) = &accepted.ended {
                    if end.won {
                        self.message = "Congratulations! You guessed the word!".to_string();
                        self.status = format!("You won! Score: {}", self.game.score());
                    } else {
                        self.message = format!("Game Over! The word was: {}", end.target);
                        self.status = "You lost".to_string();
                    }
                }
            }
            Err(e) => {
                info_log!("submit_current_input() - Rejected '{}': {}", guess, e);
                self.error_message = e.to_string();
            }
        }
    }

    fn handle_game_over_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('n' | 'N') => {
                self.game.restart(&self.bank);
                self.current_input.clear();
                self.message.clear();
                self.error_message.clear();
                self.status = format!("New game - Score carries over: {}", self.game.score());
                info_log!("handle_game_over_input() - Restarted game");
                None
            }
            KeyCode::Esc => Some(Action::Exit),
            _ => None,
        }
    }
}

impl Drop for GameTui {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
