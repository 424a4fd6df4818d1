//! TUI rendering with ratatui
//!
//! The guess grid, the status keyboard and the session statistics.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Alphabet, Answer, AnswerFlag};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - grid on the left, keyboard and info on the right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn flag_style(flag: AnswerFlag) -> Style {
    match flag {
        AnswerFlag::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        AnswerFlag::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        AnswerFlag::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        AnswerFlag::Unknown => Style::default().fg(Color::DarkGray),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 W O R D L E 🟨")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn answer_line(answer: &Answer) -> Line<'static> {
    let mut spans = Vec::with_capacity(answer.letters().len() * 2);
    for (&letter, &flag) in answer.letters().iter().zip(answer.flags()) {
        spans.push(Span::styled(format!(" {letter} "), flag_style(flag)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn input_line(buffer: &str, word_size: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(word_size * 2);
    let typed: Vec<char> = buffer.chars().collect();
    for i in 0..word_size {
        let cell = typed.get(i).map_or(" _ ".to_string(), |c| format!(" {c} "));
        spans.push(Span::styled(
            cell,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();
    let word_size = app.game.word_size();
    let max_tries = state.max_tries();

    let mut lines = vec![Line::raw("")];
    for answer in state.answers() {
        lines.push(answer_line(answer));
        lines.push(Line::raw(""));
    }

    let mut remaining = max_tries.saturating_sub(state.answers().len());
    if state.is_playing() && remaining > 0 {
        lines.push(input_line(&app.input_buffer, word_size));
        lines.push(Line::raw(""));
        remaining -= 1;
    }
    let empty = Answer::empty(word_size);
    for _ in 0..remaining {
        lines.push(answer_line(&empty));
        lines.push(Line::raw(""));
    }

    let title = format!(" Guess {}/{} ", state.answers().len(), max_tries);
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn keyboard_line(row: &str, alphabet: &Alphabet) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.len() * 2);
    for letter in row.chars() {
        spans.push(Span::styled(
            format!(" {letter} "),
            flag_style(alphabet.status(letter)),
        ));
    }
    Line::from(spans)
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let alphabet = app.alphabet();
    let lines = vec![
        keyboard_line("QWERTYUIOP", &alphabet),
        keyboard_line("ASDFGHJKL", &alphabet),
        keyboard_line("ZXCVBNM", &alphabet),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Keyboard
            Constraint::Min(4),         // Messages
            Constraint::Length(6),      // Statistics
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_stats(f, app, chunks[2]);
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

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let win_rate = if stats.total_games > 0 {
        stats.games_won as f64 / stats.total_games as f64 * 100.0
    } else {
        0.0
    };

    let distribution: String = stats
        .guess_distribution
        .iter()
        .enumerate()
        .skip(1)
        .map(|(tries, &count)| format!("{tries}:{count}"))
        .collect::<Vec<_>>()
        .join("  ");

    let content = vec![
        Line::from(format!("Played:   {}", stats.total_games)),
        Line::from(format!("Won:      {} ({win_rate:.0}%)", stats.games_won)),
        Line::from(format!("Guesses:  {distribution}")),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for a new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Typing => (
            " Type your guess and press Enter ",
            app.input_buffer.clone(),
            Color::Yellow,
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
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let tries_text = format!(
        "Tries: {}/{}",
        app.game.state().answers().len(),
        app.game.max_tries()
    );
    let tries = Paragraph::new(tries_text).alignment(Alignment::Center);
    f.render_widget(tries, chunks[0]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "n: New Game | q: Quit",
        InputMode::Typing => "Enter: Submit | Backspace: Delete | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
