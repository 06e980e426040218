//! Testing utilities for shelfr
//!
//! Small product builders shared by the unit tests across modules.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Product, Rating};

/// Build a product with the given id and title and plausible filler fields
#[must_use]
pub fn product(id: u64, title: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        price: 9.99,
        description: format!("Description of {title}"),
        category: "misc".to_string(),
        image: format!("https://example.com/{id}.jpg"),
        rating: Rating { rate: 3.5, count: 7 },
    }
}

/// Build `count` products with ids 1..=count and titles "Product {id}"
#[must_use]
pub fn sample_products(count: usize) -> Vec<Product> {
    (1..=count as u64).map(|id| product(id, &format!("Product {id}"))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_products_are_sequential() {
        let products = sample_products(4);

        assert_eq!(products.len(), 4);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[3].id, 4);
        assert_eq!(products[2].title, "Product 3");
    }

    #[test]
    fn test_sample_products_empty() {
        assert!(sample_products(0).is_empty());
    }
}
