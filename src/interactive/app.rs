//! TUI application state and logic

use crate::core::Alphabet;
use crate::game::{GameError, GameState, InputStatus, Wordle};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const VICTORY_MESSAGES: [&str; 6] = [
    "Genius",
    "Magnificent",
    "Impressive",
    "Splendid",
    "Great",
    "Phew",
];

/// Application state
pub struct App<'a> {
    words: &'a [String],
    pub game: Wordle,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    max_tries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// In-memory session statistics, reset when the program exits
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by guess count, index 1..=max_tries
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    fn new(max_tries: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; max_tries + 1],
        }
    }

    fn record(&mut self, state: &GameState) {
        self.total_games += 1;
        if let GameState::Won { answers, .. } = state {
            self.games_won += 1;
            if let Some(slot) = self.guess_distribution.get_mut(answers.len()) {
                *slot += 1;
            }
        }
    }
}

impl<'a> App<'a> {
    /// Create the app with a first game already running
    ///
    /// # Errors
    /// Fails if the dictionary is rejected by the session constructor.
    pub fn new(words: &'a [String], max_tries: usize) -> Result<Self, GameError> {
        let game = Wordle::new(words, None, max_tries)?;
        let input_mode = if game.state().is_playing() {
            InputMode::Typing
        } else {
            InputMode::GameOver
        };

        Ok(Self {
            words,
            game,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Type a word and press Enter to guess.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::new(max_tries),
            should_quit: false,
            input_mode,
            max_tries,
        })
    }

    /// Letter-status summary over all answers so far
    #[must_use]
    pub fn alphabet(&self) -> Alphabet {
        Alphabet::from_answers(self.game.state().answers())
    }

    pub fn push_char(&mut self, c: char) {
        if self.input_mode == InputMode::Typing
            && c.is_ascii_alphabetic()
            && self.input_buffer.chars().count() < self.game.word_size()
        {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
    }

    /// Play the typed word
    pub fn submit(&mut self) {
        let input = self.input_buffer.clone();
        match self.game.play_word(&input) {
            InputStatus::Valid => {
                self.input_buffer.clear();
                if !self.game.state().is_playing() {
                    self.finish_game();
                }
            }
            InputStatus::TooShort => self.add_message("Not enough letters", MessageStyle::Error),
            InputStatus::TooLong => self.add_message("Too many letters", MessageStyle::Error),
            InputStatus::NotInDictionary => self.add_message("Not in word list", MessageStyle::Error),
            InputStatus::NotPlaying => {
                self.add_message("Game over - press 'n' for a new game", MessageStyle::Error);
            }
        }
    }

    fn finish_game(&mut self) {
        self.stats.record(self.game.state());
        self.input_mode = InputMode::GameOver;

        match self.game.state() {
            GameState::Won { answers, .. } => {
                let label = VICTORY_MESSAGES
                    .get(answers.len().saturating_sub(1))
                    .unwrap_or(&"Solved");
                self.add_message(&format!("🎉 {label}!"), MessageStyle::Success);
            }
            GameState::Lost { selected_word, .. } => {
                let text = format!("The word was {selected_word}");
                self.add_message(&text, MessageStyle::Error);
            }
            GameState::Playing { .. } => {}
        }
        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Replace the session with a fresh one, new random secret
    pub fn new_game(&mut self) {
        match Wordle::new(self.words, None, self.max_tries) {
            Ok(game) => {
                self.game = game;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = if self.game.state().is_playing() {
                    InputMode::Typing
                } else {
                    InputMode::GameOver
                };
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {}
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.push_char(c);
                    }
                    KeyCode::Backspace => {
                        app.pop_char();
                    }
                    KeyCode::Enter => {
                        app.submit();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<String> {
        ["ERROR", "MISSS", "TUTUT"]
            .iter()
            .map(|w| (*w).to_string())
            .collect()
    }

    fn app_with_secret(max_tries: usize) -> App<'static> {
        // Single-word dictionary pins the random secret for tests
        let words: &'static Vec<String> = Box::leak(Box::new(vec!["TUTUT".to_string()]));
        App::new(words, max_tries).unwrap()
    }

    #[test]
    fn typing_is_bounded_by_word_size() {
        let binding = words();
        let mut app = App::new(&binding, 6).unwrap();
        for c in "abcdefgh".chars() {
            app.push_char(c);
        }
        assert_eq!(app.input_buffer, "ABCDE");
    }

    #[test]
    fn non_letters_are_ignored() {
        let binding = words();
        let mut app = App::new(&binding, 6).unwrap();
        app.push_char('1');
        app.push_char('é');
        app.push_char('t');
        assert_eq!(app.input_buffer, "T");
    }

    #[test]
    fn short_submission_reports_and_keeps_buffer_mode() {
        let binding = words();
        let mut app = App::new(&binding, 6).unwrap();
        app.push_char('t');
        app.submit();
        assert_eq!(app.input_mode, InputMode::Typing);
        assert!(app.game.state().answers().is_empty());
    }

    #[test]
    fn winning_updates_stats_and_mode() {
        let mut app = app_with_secret(6);
        for c in "tutut".chars() {
            app.push_char(c);
        }
        app.submit();
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
    }

    #[test]
    fn zero_tries_starts_game_over() {
        let app = app_with_secret(0);
        assert_eq!(app.input_mode, InputMode::GameOver);
    }

    #[test]
    fn new_game_resets_the_session() {
        let mut app = app_with_secret(6);
        for c in "tutut".chars() {
            app.push_char(c);
        }
        app.submit();
        app.new_game();
        assert_eq!(app.input_mode, InputMode::Typing);
        assert!(app.game.state().answers().is_empty());
        // Statistics survive across games
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn messages_are_capped() {
        let binding = words();
        let mut app = App::new(&binding, 6).unwrap();
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
    }
}
