//! In-memory catalog store: search, pagination, and local mutations
//!
//! The store owns two sequences: `products`, the authoritative collection,
//! and `filtered`, the projection of it matching the current search query.
//! The projection is a pure function of (products, query) and is re-derived
//! through the same predicate after every mutating operation, so it can
//! never drift from the collection.
//!
//! Mutations are local only; nothing is written back to the remote API.

use crate::catalog::models::{Product, ProductDraft, Rating};

/// Number of products shown per page when the config does not say otherwise
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Process-local catalog state, lifecycle bound to one session
#[derive(Debug, Clone)]
pub struct CatalogStore {
    /// Authoritative ordered product collection
    products: Vec<Product>,
    /// Projection of `products` matching `search_query`
    filtered: Vec<Product>,
    /// Current case-insensitive title filter, empty matches everything
    search_query: String,
    /// 1-based page cursor over the projection
    current_page: usize,
    /// Fixed page size for this store
    items_per_page: usize,
    /// Next id handed out to a locally created product
    ///
    /// Monotonic counter, never reused after a delete.
    next_id: u64,
}

impl CatalogStore {
    /// Create an empty store with the given page size (minimum 1)
    #[must_use]
    pub fn new(items_per_page: usize) -> Self {
        Self {
            products: Vec::new(),
            filtered: Vec::new(),
            search_query: String::new(),
            current_page: 1,
            items_per_page: items_per_page.max(1),
            next_id: 1,
        }
    }

    /// Seed the store from a fetched collection
    ///
    /// Replaces the whole catalog, re-derives the projection, returns the
    /// cursor to page 1, and advances the id counter past the largest
    /// fetched id so locally created products never collide with it.
    pub fn seed(&mut self, products: Vec<Product>) {
        self.next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        self.products = products;
        self.current_page = 1;
        self.refilter();
    }

    /// Set the search query and re-derive the projection
    ///
    /// The projection becomes the subsequence of products whose title
    /// contains the query case-insensitively; an empty query matches all.
    /// Always returns the user to the first result page.
    pub fn search(&mut self, query: &str) {
        self.search_query = query.to_string();
        self.current_page = 1;
        self.refilter();
    }

    /// The products visible on the current page
    ///
    /// Pure accessor: a contiguous slice of the projection, at most
    /// `items_per_page` long, empty when the offset is past the end.
    #[must_use]
    pub fn current_page_items(&self) -> &[Product] {
        let start = (self.current_page - 1) * self.items_per_page;
        if start >= self.filtered.len() {
            return &[];
        }
        let end = (start + self.items_per_page).min(self.filtered.len());
        &self.filtered[start..end]
    }

    /// Number of pages in the projection, never less than 1
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(self.items_per_page).max(1)
    }

    /// Move the cursor, clamped to `[1, page_count()]`
    ///
    /// Out-of-range requests land on the nearest valid page instead of
    /// letting the cursor drift past the data.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.page_count());
    }

    /// Advance one page (saturating at the last page)
    pub fn next_page(&mut self) {
        self.set_page(self.current_page + 1);
    }

    /// Go back one page (saturating at page 1)
    pub fn prev_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1));
    }

    /// Create a product from a draft and append it to the catalog
    ///
    /// Absent text fields default to empty, absent numeric fields to zero -
    /// including both rating fields. (Edit defaults differently; see
    /// [`update`](Self::update).) Returns the assigned id.
    pub fn add(&mut self, draft: &ProductDraft) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.products.push(Product {
            id,
            title: draft.title.clone().unwrap_or_default(),
            price: draft.price.unwrap_or(0.0),
            description: draft.description.clone().unwrap_or_default(),
            category: draft.category.clone().unwrap_or_default(),
            image: draft.image.clone().unwrap_or_default(),
            rating: Rating {
                rate: draft.rating_rate.unwrap_or(0.0),
                count: draft.rating_count.unwrap_or(0),
            },
        });
        self.refilter();
        id
    }

    /// Replace the product with the given id using the draft's fields
    ///
    /// Text and price fields default as in [`add`](Self::add), but absent
    /// rating fields keep the stored product's values rather than zeroing.
    /// The product keeps its position in the collection. Returns `false`
    /// without touching anything when the id is not present.
    pub fn update(&mut self, id: u64, draft: &ProductDraft) -> bool {
        let Some(index) = self.products.iter().position(|p| p.id == id) else {
            return false;
        };

        let existing = &self.products[index];
        let replacement = Product {
            id,
            title: draft.title.clone().unwrap_or_default(),
            price: draft.price.unwrap_or(0.0),
            description: draft.description.clone().unwrap_or_default(),
            category: draft.category.clone().unwrap_or_default(),
            image: draft.image.clone().unwrap_or_default(),
            rating: Rating {
                rate: draft.rating_rate.unwrap_or(existing.rating.rate),
                count: draft.rating_count.unwrap_or(existing.rating.count),
            },
        };
        self.products[index] = replacement;
        self.refilter();
        true
    }

    /// Remove the product with the given id
    ///
    /// Deleting an absent id is not an error; returns whether a product was
    /// actually removed.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        let removed = self.products.len() != before;
        if removed {
            self.refilter();
        }
        removed
    }

    /// Look up a product by id (linear search, collections are small)
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Full authoritative collection
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Current projection (all products matching the search query)
    #[must_use]
    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    /// Active search query
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Current 1-based page number
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Fixed page size
    #[must_use]
    pub const fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Re-derive the projection and keep the page cursor in range
    ///
    /// Every mutation funnels through here, so the projection always equals
    /// the predicate applied to the current collection and the cursor can
    /// never point past the last page after the projection shrinks.
    fn refilter(&mut self) {
        let needle = self.search_query.to_lowercase();
        self.filtered = self
            .products
            .iter()
            .filter(|p| needle.is_empty() || p.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        self.current_page = self.current_page.clamp(1, self.page_count());
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}
