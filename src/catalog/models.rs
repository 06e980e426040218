//! Data models for the product catalog
//!
//! These are pure data structures with minimal logic. The wire shape mirrors
//! the remote API's JSON: a flat product record with a nested rating object.
//! Direct field access is used for comparisons and filtering (idiomatic Rust
//! style).

use serde::{Deserialize, Serialize};

/// One catalog item as delivered by the remote API
///
/// `id` is server-assigned for fetched items and counter-assigned by the
/// store for items created locally. All other fields are free-form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within the collection
    pub id: u64,

    /// Display title, free-form
    pub title: String,

    /// Non-negative price (data-source contract, not validated here)
    pub price: f64,

    /// Long description text
    pub description: String,

    /// Category label, free-form
    pub category: String,

    /// URL of the display image
    pub image: String,

    /// Aggregate customer rating
    pub rating: Rating,
}

/// Aggregate rating: average score plus number of votes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    /// Average score
    pub rate: f64,

    /// Number of ratings the average is built from
    pub count: u64,
}

/// Scratch record backing the shared add/edit form
///
/// Every field is optional; commit-time defaulting differs between create
/// and edit (see [`CatalogStore::add`](crate::catalog::CatalogStore::add)
/// and [`CatalogStore::update`](crate::catalog::CatalogStore::update)).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub rating_rate: Option<f64>,
    pub rating_count: Option<u64>,
}

impl ProductDraft {
    /// True when no field has been filled in
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.image.is_none()
            && self.rating_rate.is_none()
            && self.rating_count.is_none()
    }
}

/// Populate a draft from an existing product when entering edit mode
///
/// The draft is an independent copy; editing it does not touch the stored
/// product until the edit is committed.
impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            title: Some(product.title.clone()),
            price: Some(product.price),
            description: Some(product.description.clone()),
            category: Some(product.category.clone()),
            image: Some(product.image.clone()),
            rating_rate: Some(product.rating.rate),
            rating_count: Some(product.rating.count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::product;

    #[test]
    fn test_draft_default_is_empty() {
        let draft = ProductDraft::default();
        assert!(draft.is_empty());
    }

    #[test]
    fn test_draft_with_field_is_not_empty() {
        let draft = ProductDraft {
            title: Some("Shirt".to_string()),
            ..Default::default()
        };
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_draft_from_product_copies_all_fields() {
        let original = product(7, "Backpack");
        let draft = ProductDraft::from(&original);

        assert_eq!(draft.title.as_deref(), Some("Backpack"));
        assert_eq!(draft.price, Some(original.price));
        assert_eq!(draft.description.as_deref(), Some(original.description.as_str()));
        assert_eq!(draft.rating_rate, Some(original.rating.rate));
        assert_eq!(draft.rating_count, Some(original.rating.count));
    }

    #[test]
    fn test_draft_edit_does_not_mutate_product() {
        let original = product(1, "Shirt");
        let mut draft = ProductDraft::from(&original);

        draft.title = Some("Renamed".to_string());

        assert_eq!(original.title, "Shirt");
    }

    #[test]
    fn test_product_json_round_trip() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://example.com/1.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.title, "Fjallraven Backpack");
        assert_eq!(product.rating.count, 120);

        let back = serde_json::to_string(&product).unwrap();
        let reparsed: Product = serde_json::from_str(&back).unwrap();
        assert_eq!(product, reparsed);
    }
}
