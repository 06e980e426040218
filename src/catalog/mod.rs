//! Catalog module - the in-memory product collection and its projections
//!
//! This module holds the core state of shelfr, independent of any frontend:
//!
//! - `models`: wire/domain types (Product, Rating, ProductDraft)
//! - `store`: the catalog store with search, pagination, and mutations
//! - `session`: the add/edit form lifecycle as an explicit state machine
//!
//! Both the CLI commands and the TUI drive the same store; neither talks to
//! the remote API after the initial fetch.

pub mod models;
pub mod session;
pub mod store;

pub use models::{Product, ProductDraft, Rating};
pub use session::{CommitOutcome, EditorSession, FormMode};
pub use store::{CatalogStore, DEFAULT_ITEMS_PER_PAGE};
