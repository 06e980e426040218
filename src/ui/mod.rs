//! Terminal UI for browsing the catalog
//!
//! A single-screen ratatui application: a search bar feeding the store's
//! title filter, one catalog page as a list, a status bar with expiring
//! messages, and modal overlays for the add/edit form and the delete
//! confirmation.
//!
//! # Architecture
//!
//! - `state`: all mutable session state and its transitions
//! - `events`: keyboard/mouse handling per mode
//! - `widgets`: one file per widget, rendering from borrowed state
//! - `app`: terminal setup and the draw/poll loop

pub mod app;
pub mod error;
pub mod events;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{SessionSummary, run};
pub use error::UiError;
