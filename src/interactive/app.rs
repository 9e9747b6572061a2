//! TUI application state and logic

use crate::core::{Board, CELLS, RankedResult};
use crate::solver::{Solution, Solver, ViewKind};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub solver: &'a Solver,
    pub input_buffer: String,
    pub board: Option<Board>,
    pub solution: Option<Solution>,
    pub tab: ViewKind,
    /// Cursor into each view, indexed by `ViewKind::index`
    pub cursors: [usize; 3],
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(solver: &'a Solver) -> Self {
        Self {
            solver,
            input_buffer: String::new(),
            board: None,
            solution: None,
            tab: ViewKind::AllWords,
            cursors: [0; 3],
            messages: vec![Message {
                text: format!("Type the {CELLS} board letters row by row, then press Enter."),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Solve the board typed into the input buffer
    pub fn solve_input(&mut self) {
        match Board::new(&self.input_buffer) {
            Ok(board) => {
                let solution = self.solver.solve(&board);
                self.add_message(
                    &format!(
                        "Found {} words in {:.4} seconds.",
                        solution.count,
                        solution.elapsed.as_secs_f64()
                    ),
                    MessageStyle::Success,
                );
                self.board = Some(board);
                self.solution = Some(solution);
                self.cursors = [0; 3];
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Entries of the selected tab (empty before the first solve)
    #[must_use]
    pub fn current_view(&self) -> &[RankedResult] {
        match &self.solution {
            Some(solution) => solution.views.get(self.tab),
            None => &[],
        }
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursors[self.tab.index()]
    }

    /// Entry under the cursor of the selected tab
    #[must_use]
    pub fn current_entry(&self) -> Option<&RankedResult> {
        self.current_view().get(self.cursor())
    }

    pub fn next_word(&mut self) {
        let len = self.current_view().len();
        let cursor = &mut self.cursors[self.tab.index()];
        if *cursor + 1 < len {
            *cursor += 1;
        }
    }

    pub fn prev_word(&mut self) {
        let cursor = &mut self.cursors[self.tab.index()];
        *cursor = cursor.saturating_sub(1);
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.tab = self.tab.previous();
    }

    /// Label for the selected tab, e.g. `All Words: CRATE (1/42) Length: 5`
    #[must_use]
    pub fn word_label(&self) -> String {
        let title = self.tab.title();
        if self.solution.is_none() {
            return format!("{title}: Enter a board to begin.");
        }

        match self.current_entry() {
            Some(entry) => format!(
                "{title}: {} ({}/{}) Length: {}",
                entry.word().to_uppercase(),
                self.cursor() + 1,
                self.current_view().len(),
                entry.len()
            ),
            None => format!("{title}: No more words."),
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

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c' | 'q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                if self.input_buffer.is_empty() {
                    self.should_quit = true;
                } else {
                    self.input_buffer.clear();
                }
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.input_buffer.len() < CELLS {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.solve_input(),
            KeyCode::Tab => self.next_tab(),
            KeyCode::BackTab => self.prev_tab(),
            KeyCode::Right | KeyCode::Down => self.next_word(),
            KeyCode::Left | KeyCode::Up => self.prev_word(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
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
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
