//! Application state for the ratatui TUI
//!
//! Manages all mutable state for the catalog browser: the store itself, the
//! row cursor, the active modal, and status messages. Every keystroke funnels
//! through methods here, so the store invariants (projection freshness, page
//! clamping) hold no matter how the UI drives it.

use crate::catalog::{CatalogStore, CommitOutcome, EditorSession, Product};
use crate::ui::widgets::{ConfirmDialogState, FormState};
use std::time::{Duration, Instant};

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Add/edit form modal is active
    Form,
    /// Delete confirmation dialog is active
    Confirm,
}

/// Message level for categorizing status output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, warning, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Application state for the catalog browser
#[derive(Debug)]
pub struct AppState {
    /// The catalog being browsed
    pub store: CatalogStore,
    /// Add/edit lifecycle state
    pub session: EditorSession,
    /// Cursor position within the current page
    pub cursor: usize,
    /// Current UI mode
    pub mode: Mode,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the browser should exit
    pub should_exit: bool,
    /// Number of local mutations applied this session
    pub mutations: usize,
    /// State for the add/edit form modal
    pub form: Option<FormState>,
    /// State for the delete confirmation dialog
    pub confirm: Option<ConfirmDialogState>,
}

impl AppState {
    /// Create new application state over a seeded store
    #[must_use]
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store,
            session: EditorSession::new(),
            cursor: 0,
            mode: Mode::Normal,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            should_exit: false,
            mutations: 0,
            form: None,
            confirm: None,
        }
    }

    /// The product under the cursor, if the page is non-empty
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.store.current_page_items().get(self.cursor)
    }

    /// Move cursor up, crossing to the previous page at the top row
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        } else if self.store.current_page() > 1 {
            self.store.prev_page();
            self.cursor = self.store.current_page_items().len().saturating_sub(1);
        }
    }

    /// Move cursor down, crossing to the next page at the bottom row
    pub fn cursor_down(&mut self) {
        let page_len = self.store.current_page_items().len();
        if self.cursor + 1 < page_len {
            self.cursor += 1;
        } else if self.store.current_page() < self.store.page_count() {
            self.store.next_page();
            self.cursor = 0;
        }
    }

    /// Jump to the next page
    pub fn next_page(&mut self) {
        self.store.next_page();
        self.cursor = 0;
    }

    /// Jump to the previous page
    pub fn prev_page(&mut self) {
        self.store.prev_page();
        self.cursor = 0;
    }

    /// Jump to the first page
    pub fn first_page(&mut self) {
        self.store.set_page(1);
        self.cursor = 0;
    }

    /// Jump to the last page
    pub fn last_page(&mut self) {
        let last = self.store.page_count();
        self.store.set_page(last);
        self.cursor = 0;
    }

    /// Append a character to the search query
    pub fn search_push(&mut self, c: char) {
        let mut query = self.store.search_query().to_string();
        query.push(c);
        self.store.search(&query);
        self.cursor = 0;
    }

    /// Remove the last character of the search query
    pub fn search_pop(&mut self) {
        let mut query = self.store.search_query().to_string();
        if query.pop().is_some() {
            self.store.search(&query);
            self.cursor = 0;
        }
    }

    /// Clear the search query
    pub fn search_clear(&mut self) {
        if !self.store.search_query().is_empty() {
            self.store.search("");
            self.cursor = 0;
        }
    }

    /// Open the form for a new product
    pub fn open_create_form(&mut self) {
        self.session.begin_create();
        self.form = Some(FormState::for_create());
        self.mode = Mode::Form;
    }

    /// Open the form for the product under the cursor
    pub fn open_edit_form(&mut self) {
        let Some(product) = self.selected_product().cloned() else {
            self.add_message(MessageLevel::Info, "Nothing to edit on this page".to_string());
            return;
        };

        self.session.begin_edit(&product);
        self.form = Some(FormState::for_edit(&product));
        self.mode = Mode::Form;
    }

    /// Close the form without committing
    pub fn cancel_form(&mut self) {
        self.session.cancel();
        self.form = None;
        self.mode = Mode::Normal;
    }

    /// Parse the form, commit the draft, and return to normal mode
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.take() else {
            self.mode = Mode::Normal;
            return;
        };

        let (draft, warnings) = form.to_draft();
        for warning in warnings {
            self.add_message(MessageLevel::Warning, warning);
        }

        if let Some(active) = self.session.draft_mut() {
            *active = draft;
        }

        match self.session.commit(&mut self.store) {
            Some(CommitOutcome::Created(id)) => {
                self.mutations += 1;
                self.add_message(MessageLevel::Success, format!("Added product {id}"));
            }
            Some(CommitOutcome::Updated(id)) => {
                self.mutations += 1;
                self.add_message(MessageLevel::Success, format!("Updated product {id}"));
            }
            Some(CommitOutcome::NotFound(id)) => {
                self.add_message(
                    MessageLevel::Warning,
                    format!("Product {id} no longer exists, nothing changed"),
                );
            }
            None => {}
        }

        self.mode = Mode::Normal;
        self.clamp_cursor();
    }

    /// Ask for confirmation before deleting the product under the cursor
    pub fn open_confirm_delete(&mut self) {
        let Some(product) = self.selected_product() else {
            self.add_message(MessageLevel::Info, "Nothing to delete on this page".to_string());
            return;
        };

        self.confirm = Some(ConfirmDialogState::new(
            product.id,
            format!("Delete '{}' (id {})?", product.title, product.id),
        ));
        self.mode = Mode::Confirm;
    }

    /// Execute the pending delete
    pub fn confirm_delete(&mut self) {
        if let Some(confirm) = self.confirm.take() {
            if self.store.delete(confirm.product_id) {
                self.mutations += 1;
                self.add_message(
                    MessageLevel::Success,
                    format!("Deleted product {}", confirm.product_id),
                );
            } else {
                self.add_message(
                    MessageLevel::Warning,
                    format!("Product {} was already gone", confirm.product_id),
                );
            }
        }
        self.mode = Mode::Normal;
        self.clamp_cursor();
    }

    /// Dismiss the confirmation dialog without deleting
    pub fn cancel_confirm(&mut self) {
        self.confirm = None;
        self.mode = Mode::Normal;
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Get non-expired messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Clean up expired messages
    pub fn cleanup_messages(&mut self) {
        self.messages.retain(|m| !m.is_expired(self.message_ttl));
    }

    /// Keep the cursor inside the (possibly shrunk) current page
    fn clamp_cursor(&mut self) {
        let page_len = self.store.current_page_items().len();
        self.cursor = self.cursor.min(page_len.saturating_sub(1));
    }
}
