//! TUI application state and event loop

use crate::game::{Action, GameState, Phase};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Action),
    Quit,
}

/// Application state
///
/// Exclusively owns the game for the lifetime of the session.
pub struct App<'a> {
    pub game: GameState<'a>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub const fn new(game: GameState<'a>) -> Self {
        Self {
            game,
            should_quit: false,
        }
    }

    /// Feed one key press into the game
    pub fn handle_key(&mut self, key: KeyEvent) {
        match command_for(key, self.game.phase()) {
            Some(Command::Quit) => self.should_quit = true,
            Some(Command::Play(action)) => {
                if !self.game.apply(action) {
                    log::trace!("ignored {action:?} in {:?}", self.game.phase());
                }
            }
            None => {}
        }
    }
}

/// Map a key press to a command
///
/// Once the game is over any key quits.
#[must_use]
pub fn command_for(key: KeyEvent, phase: Phase) -> Option<Command> {
    if phase.is_terminal() {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Enter => Some(Command::Play(Action::Confirm)),
        KeyCode::Backspace => Some(Command::Play(Action::Backspace)),
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            None
        }
        KeyCode::Char(c) => Some(Command::Play(Action::Type(c))),
        _ => None,
    }
}

/// Run the TUI application
///
/// Returns the application as it was when the player quit.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(mut app: App<'_>) -> Result<App<'_>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map(|()| app)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }
    }

    Ok(())
}
