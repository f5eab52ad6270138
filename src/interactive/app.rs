//! TUI application state and logic

use crate::core::{GuessOutcome, Letter, Word};
use crate::engine::{GameRng, RoundSummary, ScoringEngine, Session, choose};
use crate::output::formatters::leaderboard_row;
use crate::players::PlayerRegistry;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Key that asks for a hint while guessing
pub const HINT_KEY: char = '?';

/// Application state
pub struct App<'a> {
    pub words: &'a [Word],
    pub registry: PlayerRegistry,
    pub scoring: ScoringEngine,
    pub rng: GameRng,
    pub session: Option<Session>,
    pub player_name: String,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub last_summary: Option<RoundSummary>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    PlayerName,
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a [Word], scoring: ScoringEngine, rng: GameRng) -> Self {
        Self {
            words,
            registry: PlayerRegistry::new(),
            scoring,
            rng,
            session: None,
            player_name: String::new(),
            input_mode: InputMode::PlayerName,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome to Hangman! Enter a player name to start.".to_string(),
                style: MessageStyle::Info,
            }],
            last_summary: None,
            should_quit: false,
        }
    }

    /// Start a round for the name in the input buffer, or quit on `quit`
    pub fn submit_name(&mut self) {
        let name = self.input_buffer.trim().to_string();
        self.input_buffer.clear();

        if name.eq_ignore_ascii_case(crate::commands::QUIT) {
            self.should_quit = true;
            return;
        }
        if name.is_empty() {
            self.add_message("Please enter a player name.", MessageStyle::Error);
            return;
        }

        let Some(word) = choose(&mut self.rng, self.words).cloned() else {
            self.add_message("No words available to play.", MessageStyle::Error);
            return;
        };

        tracing::debug!(player = %name, letters = word.len(), "round started");
        self.registry.get_or_create(&name);
        self.session = Some(Session::start(word, self.scoring));
        self.last_summary = None;
        self.input_mode = InputMode::Guessing;
        self.add_message(&format!("{name}'s turn!"), MessageStyle::Info);
        self.player_name = name;
    }

    /// Guess the letter for a key press
    pub fn guess_char(&mut self, ch: char) {
        let Some(letter) = Letter::from_char(ch) else {
            self.add_message("Please enter a valid alphabet letter.", MessageStyle::Error);
            return;
        };

        let Some(session) = self.session.as_mut() else {
            return;
        };
        let player = self.registry.get_or_create(&self.player_name);
        let Ok(report) = session.guess(player, letter) else {
            return;
        };
        let summary = session.summary();

        match report.outcome {
            GuessOutcome::Correct { .. } => {
                self.add_message(
                    &format!("Correct! +{} points!", report.points),
                    MessageStyle::Success,
                );
            }
            GuessOutcome::Incorrect => {
                self.add_message(
                    &format!("Sorry, '{letter}' is not in the word."),
                    MessageStyle::Error,
                );
            }
            GuessOutcome::AlreadyGuessed => {
                self.add_message(
                    "This letter has already been guessed. Try another one.",
                    MessageStyle::Error,
                );
            }
        }

        if let Some(summary) = summary {
            self.finish_round(summary);
        } else if self.hint_available() {
            self.add_message(
                &format!("Press '{HINT_KEY}' for a hint (-{} points)", self.scoring.hint_penalty),
                MessageStyle::Info,
            );
        }
    }

    /// Whether the current round would accept a hint request
    #[must_use]
    pub fn hint_available(&self) -> bool {
        self.session.as_ref().is_some_and(Session::hint_eligible)
    }

    pub fn request_hint(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let player = self.registry.get_or_create(&self.player_name);
        match session.take_hint(player, &mut self.rng) {
            Ok(grant) => {
                let score = player.score;
                self.add_message(&format!("Hint: {}", grant.hint), MessageStyle::Success);
                self.add_message(
                    &format!(
                        "{} points deducted for using a hint. Current score: {score}",
                        grant.deducted
                    ),
                    MessageStyle::Info,
                );
            }
            Err(refusal) => self.add_message(&refusal.to_string(), MessageStyle::Error),
        }
    }

    fn finish_round(&mut self, summary: RoundSummary) {
        self.registry
            .record_round_result(&self.player_name, summary.won);
        if summary.won {
            self.add_message(
                &format!("Congratulations {}! You've won!", self.player_name),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("Game Over! The word was: {}", summary.word),
                MessageStyle::Error,
            );
        }
        self.add_message("Press Enter for the next player.", MessageStyle::Info);
        self.last_summary = Some(summary);
        self.input_mode = InputMode::RoundOver;
    }

    /// Leave the results screen and ask for the next player
    pub fn next_player(&mut self) {
        self.session = None;
        self.input_buffer.clear();
        self.input_mode = InputMode::PlayerName;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }

    /// Leaderboard lines, best first
    #[must_use]
    pub fn leaderboard_lines(&self) -> Vec<String> {
        self.registry
            .ranked_view()
            .iter()
            .enumerate()
            .map(|(i, player)| leaderboard_row(i + 1, player))
            .collect()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::PlayerName => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => self.submit_name(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                // Abandoned rounds are not recorded
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(HINT_KEY) => self.request_hint(),
                KeyCode::Char(c) => self.guess_char(c),
                _ => {}
            },
            InputMode::RoundOver => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char('n') => self.next_player(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// Returns the registry so the final standings can be printed after the
/// terminal is restored.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<PlayerRegistry> {
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

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<PlayerRegistry> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.registry)
}
