//! TUI rendering with ratatui
//!
//! The input box, the three result tabs, and the board with the current
//! word's path drawn on it.

use super::app::{App, MessageStyle};
use crate::core::{Board, CELLS, Coord, Path, SIZE};
use crate::output::formatters::format_path;
use crate::solver::ViewKind;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Tabs
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_input(f, app, chunks[1]);
    render_tabs(f, app, chunks[2]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board and current word
            Constraint::Percentage(50), // Word list and messages
        ])
        .split(chunks[3]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD HUNT SOLVER - Interactive Mode")
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        " Enter {CELLS} letters ({}/{CELLS}) | Enter: Solve | Esc: Clear ",
        app.input_buffer.len()
    );

    let input = Paragraph::new(app.input_buffer.to_uppercase())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = ViewKind::ALL
        .iter()
        .map(|kind| Line::from(kind.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Word label
            Constraint::Length(SIZE as u16 * 2 + 3), // Board
            Constraint::Min(3),                      // Path
        ])
        .split(area);

    let label = Paragraph::new(app.word_label())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(label, chunks[0]);

    let path = app
        .current_entry()
        .map(|entry| entry.path().clone())
        .unwrap_or_default();

    render_board(f, app.board.as_ref(), &path, chunks[1]);

    let path_text = if path.is_empty() {
        String::new()
    } else {
        format_path(&path)
    };
    let path_widget = Paragraph::new(path_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Path ").borders(Borders::ALL));
    f.render_widget(path_widget, chunks[2]);
}

/// Style for a board cell given its place on the path
fn cell_style(path: &Path, coord: Coord) -> Style {
    if path.first() == Some(coord) {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else if path.last() == Some(coord) {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else if path.step_of(coord).is_some() {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

/// Board lines: each cell shows its letter and, on the path, its step number
fn board_lines(board: &Board, path: &Path) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(SIZE * 2);
    for row in 0..SIZE {
        let spans: Vec<Span> = (0..SIZE)
            .flat_map(|col| {
                let coord = Coord::new(row, col);
                let letter = char::from(board.letter(coord)).to_ascii_uppercase();
                let step = path
                    .step_of(coord)
                    .map_or_else(|| "  ".to_string(), |s| format!("{:<2}", s + 1));
                [
                    Span::styled(format!(" {letter}{step}"), cell_style(path, coord)),
                    Span::raw("  "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines
}

fn render_board(f: &mut Frame, board: Option<&Board>, path: &Path, area: Rect) {
    let content = board.map_or_else(
        || vec![Line::from("No board yet")],
        |board| board_lines(board, path),
    );

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(70), // Word list
            Constraint::Percentage(30), // Messages
        ])
        .split(area);

    render_word_list(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_word_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .current_view()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<12}", entry.word().to_uppercase()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(format!("{:>2} ", entry.len())),
                Span::styled(entry.rank.to_string(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", app.tab.title()))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !app.current_view().is_empty() {
        state.select(Some(app.cursor()));
    }

    f.render_stateful_widget(list, area, &mut state);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let found_text = app.solution.as_ref().map_or_else(
        || "Words: -".to_string(),
        |solution| format!("Words: {}", solution.count),
    );
    f.render_widget(Paragraph::new(found_text).alignment(Alignment::Center), chunks[0]);

    let search_text = format!("Search: {}", app.solver.options().search.name());
    f.render_widget(Paragraph::new(search_text).alignment(Alignment::Center), chunks[1]);

    let help = Paragraph::new("Tab: View | ←/→: Prev/Next | Esc: Clear/Quit | Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
