//! Editor session management for the shared add/edit form
//!
//! One form serves both "create" and "edit" flows. Instead of a loose
//! boolean-plus-nullable-id pair, the session models the interaction as an
//! explicit tagged state, so a draft can never outlive its mode and
//! navigating away from an uncommitted edit cannot leave the form stuck in
//! edit mode.
//!
//! # Workflow
//!
//! ```text
//! Idle
//!   ├─ begin_create() ──→ Creating(draft)
//!   └─ begin_edit(p) ───→ Editing { id, draft = copy of p }
//! Creating / Editing
//!   ├─ commit(store) ───→ Idle  (store mutated, outcome reported)
//!   └─ cancel() ────────→ Idle  (draft discarded)
//! ```

use crate::catalog::models::{Product, ProductDraft};
use crate::catalog::store::CatalogStore;

/// Which record the draft currently targets
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormMode {
    /// No form is open
    #[default]
    Idle,

    /// Drafting a new product
    Creating(ProductDraft),

    /// Editing an existing product
    Editing {
        /// Id of the product being edited
        id: u64,
        /// Working copy; the stored product is untouched until commit
        draft: ProductDraft,
    },
}

/// What a commit did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A new product was appended, with the assigned id
    Created(u64),

    /// The product with this id was replaced
    Updated(u64),

    /// The edit target vanished before commit; the store is unchanged
    NotFound(u64),
}

/// Drives the draft lifecycle against a catalog store
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    mode: FormMode,
}

impl EditorSession {
    /// Create an idle session
    #[must_use]
    pub const fn new() -> Self {
        Self { mode: FormMode::Idle }
    }

    /// Current form mode
    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// True while a form is open
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self.mode, FormMode::Idle)
    }

    /// Open the form for a new product with an empty draft
    pub fn begin_create(&mut self) {
        self.mode = FormMode::Creating(ProductDraft::default());
    }

    /// Open the form for an existing product
    ///
    /// The draft is populated from a copy of the product; edits stay in the
    /// draft until commit.
    pub fn begin_edit(&mut self, product: &Product) {
        self.mode = FormMode::Editing {
            id: product.id,
            draft: ProductDraft::from(product),
        };
    }

    /// The active draft, if a form is open
    #[must_use]
    pub const fn draft_mut(&mut self) -> Option<&mut ProductDraft> {
        match &mut self.mode {
            FormMode::Idle => None,
            FormMode::Creating(draft) | FormMode::Editing { draft, .. } => Some(draft),
        }
    }

    /// Id of the product being edited, if any
    #[must_use]
    pub const fn editing_id(&self) -> Option<u64> {
        match self.mode {
            FormMode::Editing { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Apply the draft to the store and return to idle
    ///
    /// Dispatches to [`CatalogStore::add`] or [`CatalogStore::update`]
    /// depending on the mode. Committing while idle is a no-op returning
    /// `None`. The session always ends up idle with the draft discarded,
    /// including when the edit target no longer exists.
    pub fn commit(&mut self, store: &mut CatalogStore) -> Option<CommitOutcome> {
        let outcome = match std::mem::take(&mut self.mode) {
            FormMode::Idle => return None,
            FormMode::Creating(draft) => CommitOutcome::Created(store.add(&draft)),
            FormMode::Editing { id, draft } => {
                if store.update(id, &draft) {
                    CommitOutcome::Updated(id)
                } else {
                    CommitOutcome::NotFound(id)
                }
            }
        };
        Some(outcome)
    }

    /// Close the form without touching the store
    pub fn cancel(&mut self) {
        self.mode = FormMode::Idle;
    }
}
