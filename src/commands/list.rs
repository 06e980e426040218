//! List, search, and show commands - read-only views of the catalog

use crate::{ShelfrError, catalog::CatalogStore, output};

type Result<T> = std::result::Result<T, ShelfrError>;

/// Execute the list command: print one page of the full catalog
pub fn list(store: &mut CatalogStore, page: usize, quiet: bool, json: bool) -> Result<()> {
    store.set_page(page);
    print_page(store, quiet, json)
}

/// Execute the search command: filter by title, then print one result page
pub fn search(
    store: &mut CatalogStore,
    query: &str,
    page: usize,
    quiet: bool,
    json: bool,
) -> Result<()> {
    store.search(query);
    store.set_page(page);
    print_page(store, quiet, json)
}

/// Execute the show command: print one product in full
pub fn show(store: &CatalogStore, id: u64, quiet: bool, json: bool) -> Result<()> {
    let Some(product) = store.get(id) else {
        return Err(ShelfrError::InvalidInput(format!("No product with id {id}")));
    };

    if json {
        println!("{}", serde_json::to_string_pretty(product)?);
    } else {
        println!("{}", output::product_detail(product, quiet));
    }
    Ok(())
}

/// Print the store's current page, honoring quiet and json flags
fn print_page(store: &CatalogStore, quiet: bool, json: bool) -> Result<()> {
    let items = store.current_page_items();

    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    if !quiet {
        println!(
            "{}",
            output::page_header(
                store.current_page(),
                store.page_count(),
                store.filtered().len(),
                store.products().len(),
                store.search_query(),
            )
        );
    }

    if items.is_empty() {
        if !quiet {
            println!("  (no products on this page)");
        }
        return Ok(());
    }

    for product in items {
        println!("{}", output::product_line(product, quiet));
    }
    Ok(())
}
