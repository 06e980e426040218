//! Add, edit, and delete commands - local catalog mutations
//!
//! Mutations apply to the in-memory catalog of the current invocation only;
//! the remote API never sees them. The affected record is printed after the
//! operation so scripted callers can capture the result.

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};

use crate::{
    ShelfrError,
    catalog::{CatalogStore, ProductDraft},
    cli::DraftArgs,
    output,
};

type Result<T> = std::result::Result<T, ShelfrError>;

/// Execute the add command
pub fn add(store: &mut CatalogStore, fields: &DraftArgs, quiet: bool, json: bool) -> Result<()> {
    let draft = ProductDraft::from(fields);
    let id = store.add(&draft);

    // The id was just assigned, the product must exist.
    let Some(created) = store.get(id) else {
        return Err(ShelfrError::InvalidInput(format!(
            "Product {id} missing after add"
        )));
    };

    if json {
        println!("{}", serde_json::to_string_pretty(created)?);
        return Ok(());
    }

    if !quiet {
        println!("{} Added product {id}", "✓".green());
    }
    println!("{}", output::product_detail(created, quiet));
    Ok(())
}

/// Execute the edit command
///
/// Fields omitted on the command line fall back to the update defaults:
/// empty text, zero price, and the stored rating values. Editing an id that
/// is not present is reported but is not an error.
pub fn edit(
    store: &mut CatalogStore,
    id: u64,
    fields: &DraftArgs,
    quiet: bool,
    json: bool,
) -> Result<()> {
    let draft = ProductDraft::from(fields);

    if !store.update(id, &draft) {
        if !quiet {
            println!("{} No product with id {id}, nothing changed", "⚠".yellow());
        }
        return Ok(());
    }

    let Some(updated) = store.get(id) else {
        return Err(ShelfrError::InvalidInput(format!(
            "Product {id} missing after update"
        )));
    };

    if json {
        println!("{}", serde_json::to_string_pretty(updated)?);
        return Ok(());
    }

    if !quiet {
        println!("{} Updated product {id}", "✓".green());
    }
    println!("{}", output::product_detail(updated, quiet));
    Ok(())
}

/// Execute the delete command
///
/// Prompts for confirmation unless `--yes` or quiet mode is set. Deleting
/// an absent id is reported but is not an error.
pub fn delete(store: &mut CatalogStore, id: u64, yes: bool, quiet: bool) -> Result<()> {
    if let Some(product) = store.get(id)
        && !yes
        && !quiet
    {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete '{}' (id {id})?", product.title))
            .default(false)
            .interact()
            .map_err(|e| ShelfrError::InvalidInput(format!("Failed to read confirmation: {e}")))?;

        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if store.delete(id) {
        if !quiet {
            println!(
                "{} Deleted product {id} ({} remaining)",
                "✓".green(),
                store.products().len()
            );
        }
    } else if !quiet {
        println!("{} No product with id {id}, nothing deleted", "⚠".yellow());
    }
    Ok(())
}
