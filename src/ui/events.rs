//! Event handling for the ratatui TUI
//!
//! Handles keyboard and mouse events, mapping them to state transitions.
//! Plain characters feed the live search; actions sit on control keys so
//! they never collide with typing a query.

use super::state::{AppState, Mode};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The event was consumed
    Continue,
    /// No action taken
    Ignored,
}

/// Handle events in normal browsing mode
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c' | 'q'), KeyModifiers::CONTROL) => {
            state.should_exit = true;
            EventResult::Continue
        }

        // Row navigation
        (KeyCode::Up, _) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.cursor_down();
            EventResult::Continue
        }

        // Page navigation
        (KeyCode::Left, _) | (KeyCode::PageUp, _) => {
            state.prev_page();
            EventResult::Continue
        }
        (KeyCode::Right, _) | (KeyCode::PageDown, _) => {
            state.next_page();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.first_page();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.last_page();
            EventResult::Continue
        }

        // Mutations
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => {
            state.open_create_form();
            EventResult::Continue
        }
        (KeyCode::Enter, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
            state.open_edit_form();
            EventResult::Continue
        }
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
            state.open_confirm_delete();
            EventResult::Continue
        }

        // Live search editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.search_push(c);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            if state.store.search_query().is_empty() {
                EventResult::Ignored
            } else {
                state.search_pop();
                EventResult::Continue
            }
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.search_clear();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Handle events while the add/edit form is open
fn handle_form_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    let Some(form) = state.form.as_mut() else {
        state.mode = Mode::Normal;
        return EventResult::Ignored;
    };

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            state.cancel_form();
            EventResult::Continue
        }
        (KeyCode::Enter, _) => {
            state.submit_form();
            EventResult::Continue
        }

        // Field navigation
        (KeyCode::Tab, _) | (KeyCode::Down, _) => {
            form.next_field();
            EventResult::Continue
        }
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
            form.prev_field();
            EventResult::Continue
        }

        // Buffer editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            form.active_field_mut().insert_char(c);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            form.active_field_mut().backspace();
            EventResult::Continue
        }
        (KeyCode::Delete, _) => {
            form.active_field_mut().delete();
            EventResult::Continue
        }
        (KeyCode::Left, _) => {
            form.active_field_mut().cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            form.active_field_mut().cursor_right();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Handle events while the delete confirmation is open
fn handle_confirm_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
            state.confirm_delete();
            EventResult::Continue
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            state.cancel_confirm();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    if state.mode != Mode::Normal {
        return EventResult::Ignored;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => match state.mode {
            Mode::Normal => handle_normal_mode(state, key),
            Mode::Form => handle_form_mode(state, key),
            Mode::Confirm => handle_confirm_mode(state, key),
        },
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
