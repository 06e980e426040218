//! Terminal lifecycle and the main draw/event loop
//!
//! Owns the alternate-screen setup, the frame layout, and the loop that
//! alternates drawing with event polling until the user quits. All state
//! transitions live in [`AppState`]; this module only wires them to the
//! terminal.

use super::error::Result;
use super::events;
use super::state::{AppState, Mode};
use super::theme::Theme;
use super::widgets::{ConfirmDialog, HelpBar, ProductForm, ProductList, SearchBar, StatusBar};
use crate::catalog::CatalogStore;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// How the browse session ended
#[derive(Debug, Clone, Copy)]
pub struct SessionSummary {
    /// Products in the catalog when the session ended
    pub product_count: usize,
    /// Local mutations applied during the session
    pub mutations: usize,
}

/// Run the interactive catalog browser over a seeded store
///
/// Blocks until the user quits, then restores the terminal and reports how
/// the session ended.
///
/// # Errors
///
/// Returns `UiError` if the terminal cannot be set up or an IO error occurs
/// while drawing or polling events.
pub fn run(store: CatalogStore) -> Result<SessionSummary> {
    let mut terminal = setup_terminal()?;
    let mut state = AppState::new(store);
    let theme = Theme::default();

    let result = run_loop(&mut terminal, &mut state, &theme);

    cleanup_terminal()?;
    result?;

    Ok(SessionSummary {
        product_count: state.store.products().len(),
        mutations: state.mutations,
    })
}

/// Setup terminal for TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

/// Cleanup terminal after TUI
fn cleanup_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Draw/poll loop until the state says to exit
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut AppState,
    theme: &Theme,
) -> Result<()> {
    while !state.should_exit {
        state.cleanup_messages();
        terminal.draw(|frame| draw(frame, state, theme))?;
        events::poll_and_handle(state, Duration::from_millis(100))?;
    }
    Ok(())
}

/// Render one frame
fn draw(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // search bar
        Constraint::Min(5),    // product list
        Constraint::Length(3), // status bar
        Constraint::Length(1), // help bar
    ])
    .split(frame.area());

    frame.render_widget(SearchBar::new(state.store.search_query(), theme), chunks[0]);
    frame.render_widget(ProductList::new(state, theme), chunks[1]);

    let messages = state.active_messages();
    frame.render_widget(
        StatusBar::new(
            &messages,
            theme,
            state.store.products().len(),
            state.mutations,
        ),
        chunks[2],
    );

    let hints = HelpBar::browse_hints();
    frame.render_widget(HelpBar::new(&hints, theme), chunks[3]);

    // Modal overlays render on top of the full frame
    match state.mode {
        Mode::Form => {
            if let Some(form) = &state.form {
                frame.render_widget(ProductForm::new(form, theme), frame.area());
            }
        }
        Mode::Confirm => {
            if let Some(confirm) = &state.confirm {
                frame.render_widget(ConfirmDialog::new(confirm, theme), frame.area());
            }
        }
        Mode::Normal => {}
    }
}
