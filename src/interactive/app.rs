//! TUI application state and logic
//!
//! Wraps a `GameSession` with everything the terminal front end needs:
//! transient messages, session statistics, and the row-reveal pacing. The
//! reveal replays the precomputed feedback of the last scored row cell by
//! cell on a timer tick; the engine is never re-invoked for animation.

use crate::core::{LetterFeedback, NUMBER_OF_TRIES, WORD_LENGTH};
use crate::session::{GameSession, GameStatus, SubmitError};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;
use std::time::Duration;

/// Time between reveal ticks (one cell per tick)
const REVEAL_TICK: Duration = Duration::from_millis(140);

/// Row-reveal animation state for the last scored row
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    pub row: usize,
    /// Cells of that row already showing their feedback
    pub shown: usize,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; NUMBER_OF_TRIES + 1],
}

/// Application state
pub struct App<'a> {
    dictionary: &'a Dictionary,
    pub session: GameSession<'a>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub reveal: Option<Reveal>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            session: GameSession::new(dictionary),
            messages: vec![
                Message {
                    text: format!("Guess the hidden word in {NUMBER_OF_TRIES} tries."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Backspace to delete, Enter to submit.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            reveal: None,
            should_quit: false,
        }
    }

    /// A letter key was pressed
    pub fn handle_letter(&mut self, ch: char) {
        if self.reveal.is_some() {
            // Ignore input while a row is being revealed
            return;
        }
        self.session.push_letter(ch);
    }

    /// Backspace was pressed
    pub fn handle_delete(&mut self) {
        if self.reveal.is_some() {
            return;
        }
        self.session.delete_letter();
    }

    /// Enter was pressed: submit the current row
    pub fn handle_submit(&mut self) {
        if self.reveal.is_some() {
            return;
        }

        match self.session.submit() {
            Ok(scored) => {
                self.reveal = Some(Reveal {
                    row: scored.row,
                    shown: 0,
                });
            }
            Err(error @ (SubmitError::Incomplete | SubmitError::UnknownWord)) => {
                self.add_message(&error.to_string(), MessageStyle::Error);
            }
            Err(SubmitError::Finished) => {}
        }
    }

    /// Advance the reveal animation by one cell
    pub fn tick(&mut self) {
        if let Some(reveal) = &mut self.reveal {
            reveal.shown += 1;
            if reveal.shown >= WORD_LENGTH {
                self.reveal = None;
                self.finish_reveal();
            }
        }
    }

    fn finish_reveal(&mut self) {
        match self.session.status() {
            GameStatus::Won => {
                let guesses = self.session.submitted_count();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.stats.guess_distribution[guesses] += 1;

                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or Esc to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.total_games += 1;
                self.add_message(
                    &format!(
                        "Out of tries! The word was {}.",
                        self.session.target().text().to_uppercase()
                    ),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or Esc to quit.", MessageStyle::Info);
            }
            GameStatus::InProgress => {}
        }
    }

    pub fn new_game(&mut self) {
        self.session = GameSession::new(self.dictionary);
        self.reveal = None;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
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

    /// Feedback state to draw for one cell, honoring the reveal pacing
    ///
    /// Cells of the row currently being revealed stay `Pending` until
    /// their tick arrives.
    #[must_use]
    pub fn visible_state(&self, row: usize, column: usize) -> LetterFeedback {
        if let Some(reveal) = self.reveal
            && reveal.row == row
            && column >= reveal.shown
        {
            return LetterFeedback::Pending;
        }
        self.session.attempts()[row].letters()[column].state()
    }

    /// Best-known feedback per letter, for the on-screen keyboard
    ///
    /// Derived entirely from fully revealed rows; Correct beats Present
    /// beats Absent.
    #[must_use]
    pub fn keyboard_hints(&self) -> FxHashMap<char, LetterFeedback> {
        fn rank(state: LetterFeedback) -> u8 {
            match state {
                LetterFeedback::Pending => 0,
                LetterFeedback::Absent => 1,
                LetterFeedback::Present => 2,
                LetterFeedback::Correct => 3,
            }
        }

        let mut hints: FxHashMap<char, LetterFeedback> = FxHashMap::default();
        for (row, attempt) in self.session.attempts().iter().enumerate() {
            if row >= self.session.submitted_count() {
                break;
            }
            if self.reveal.is_some_and(|reveal| reveal.row == row) {
                continue;
            }
            for cell in attempt.letters() {
                if let Some(ch) = cell.character() {
                    let state = cell.state();
                    let current = hints.entry(ch).or_insert(LetterFeedback::Pending);
                    if rank(state) > rank(*current) {
                        *current = state;
                    }
                }
            }
        }
        hints
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

        // Poll doubles as the reveal timer: timeouts advance the animation
        if event::poll(REVEAL_TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if app.session.status() != GameStatus::InProgress => {
                        app.new_game();
                    }
                    KeyCode::Char('q') if app.session.status() != GameStatus::InProgress => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.handle_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.handle_delete();
                    }
                    KeyCode::Enter => {
                        app.handle_submit();
                    }
                    _ => {}
                }
            }
        } else {
            app.tick();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
