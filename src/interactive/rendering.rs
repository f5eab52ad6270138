//! TUI rendering with ratatui

use super::app::{App, HINT_KEY, InputMode, MessageStyle};
use crate::core::GameState;
use crate::output::formatters::{GALLOWS, gallows, guessed_letters};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Round
            Constraint::Percentage(55), // Leaderboard and messages
        ])
        .split(chunks[1]);

    render_round_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_round_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Gallows
            Constraint::Min(5),    // Word
            Constraint::Length(3), // Mistakes gauge
        ])
        .split(area);

    match app.session.as_ref().map(|s| s.state()) {
        Some(state) => {
            render_gallows(f, gallows(state), chunks[0]);
            render_word(f, state, app.input_mode == InputMode::RoundOver, chunks[1]);
            render_mistakes(f, state, chunks[2]);
        }
        None => {
            render_gallows(f, GALLOWS[0], chunks[0]);
            let idle = Paragraph::new("Waiting for a player...").block(
                Block::default()
                    .title(" Word ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
            f.render_widget(idle, chunks[1]);
        }
    }
}

fn render_gallows(f: &mut Frame, art: &str, area: Rect) {
    let lines: Vec<Line> = art.lines().map(Line::from).collect();
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_word(f: &mut Frame, state: &GameState, reveal: bool, area: Rect) {
    let mut content = vec![Line::from(vec![
        Span::raw("Word:    "),
        Span::styled(
            state.render(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if reveal && state.is_lost() {
        content.push(Line::from(vec![
            Span::raw("Answer:  "),
            Span::styled(
                state.reveal().text().to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    content.push(Line::from(format!("Guessed: {}", guessed_letters(state))));
    content.push(Line::from(format!(
        "Incorrect guesses remaining: {}",
        state.remaining_incorrect()
    )));

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_mistakes(f: &mut Frame, state: &GameState, area: Rect) {
    let used = state.incorrect_count();
    let total = used + state.remaining_incorrect();
    let ratio = if total == 0 {
        0.0
    } else {
        used as f64 / total as f64
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Mistakes ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Red))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{used}/{total}"));
    f.render_widget(gauge, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55), // Leaderboard
            Constraint::Percentage(45), // Messages
        ])
        .split(area);

    render_leaderboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_leaderboard(f: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<ListItem> = app
        .leaderboard_lines()
        .into_iter()
        .map(ListItem::new)
        .collect();

    let board = List::new(rows).block(
        Block::default()
            .title(" Highscores ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::PlayerName => (
            " Enter player name (or 'quit' to exit) ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::Guessing => (" Type a letter to guess ", "", Color::Cyan),
        InputMode::RoundOver => (
            " Round over | Enter: next player | q: quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let player_text = if app.player_name.is_empty() {
        "Player: -".to_string()
    } else {
        format!("Player: {}", app.player_name)
    };
    f.render_widget(
        Paragraph::new(player_text).alignment(Alignment::Center),
        chunks[0],
    );

    let score = app
        .registry
        .get(&app.player_name)
        .map_or(0, |player| player.score);
    f.render_widget(
        Paragraph::new(format!("Score: {score}")).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Guessing if app.hint_available() => {
            format!("Esc: Quit | {HINT_KEY}: Hint (-{})", app.scoring.hint_penalty)
        }
        InputMode::Guessing | InputMode::PlayerName => "Esc: Quit | Enter: Submit".to_string(),
        InputMode::RoundOver => "q: Quit | n: Next".to_string(),
    };
    f.render_widget(
        Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}
