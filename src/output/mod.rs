//! Output formatting for CLI display
//!
//! This module provides utilities for formatting catalog output in the CLI:
//! one-line product rows, detail blocks, and page headers. Quiet mode strips
//! decoration down to machine-friendly plain text.

use crate::catalog::Product;
use colored::Colorize;

/// Format a product as a one-line list entry
#[must_use]
pub fn product_line(product: &Product, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}\t{:.2}", product.id, product.title, product.price);
    }

    format!(
        "  {:>4}  {}  {}  {}",
        product.id.to_string().dimmed(),
        format!("${:.2}", product.price).green(),
        product.title.bold(),
        format!("[{}]", product.category).cyan()
    )
}

/// Format a full product record for the `show` command
#[must_use]
pub fn product_detail(product: &Product, quiet: bool) -> String {
    if quiet {
        return format!(
            "{}\t{}\t{:.2}\t{}\t{}\t{}\t{:.1}\t{}",
            product.id,
            product.title,
            product.price,
            product.category,
            product.description,
            product.image,
            product.rating.rate,
            product.rating.count,
        );
    }

    let mut lines = Vec::new();
    lines.push(format!("{} {}", "Product".bold(), product.id.to_string().dimmed()));
    lines.push(format!("  {:<12}{}", "title", product.title.bold()));
    lines.push(format!("  {:<12}{}", "price", format!("${:.2}", product.price).green()));
    lines.push(format!("  {:<12}{}", "category", product.category.cyan()));
    if !product.description.is_empty() {
        lines.push(format!("  {:<12}{}", "description", product.description));
    }
    if !product.image.is_empty() {
        lines.push(format!("  {:<12}{}", "image", product.image.dimmed()));
    }
    lines.push(format!(
        "  {:<12}{:.1} ({} ratings)",
        "rating", product.rating.rate, product.rating.count
    ));
    lines.join("\n")
}

/// Format the header line above a page of results
#[must_use]
pub fn page_header(page: usize, page_count: usize, matched: usize, total: usize, query: &str) -> String {
    if query.is_empty() {
        format!("Page {page}/{page_count} ({total} products)")
    } else {
        format!("Page {page}/{page_count} ({matched}/{total} products matching '{query}')")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::product;

    #[test]
    fn test_quiet_line_is_tab_separated() {
        let line = product_line(&product(3, "Shirt"), true);
        assert_eq!(line.split('\t').count(), 3);
        assert!(line.starts_with("3\tShirt\t"));
    }

    #[test]
    fn test_line_contains_title_and_price() {
        let line = product_line(&product(1, "Shirt"), false);
        assert!(line.contains("Shirt"));
        assert!(line.contains('$'));
    }

    #[test]
    fn test_detail_includes_rating() {
        let detail = product_detail(&product(1, "Shirt"), false);
        assert!(detail.contains("rating"));
        assert!(detail.contains("ratings)"));
    }

    #[test]
    fn test_page_header_mentions_query_only_when_filtering() {
        assert_eq!(page_header(1, 3, 12, 12, ""), "Page 1/3 (12 products)");
        assert_eq!(
            page_header(2, 2, 7, 12, "shirt"),
            "Page 2/2 (7/12 products matching 'shirt')"
        );
    }
}
