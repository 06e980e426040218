//! Browse command - the interactive TUI session

use crate::{ShelfrError, catalog::CatalogStore, ui};

type Result<T> = std::result::Result<T, ShelfrError>;

/// Execute the browse command
///
/// Hands the seeded store to the TUI event loop and reports the end state
/// of the session. Local edits live and die with the session.
pub fn execute(store: CatalogStore, quiet: bool) -> Result<()> {
    let summary = ui::run(store)?;

    if !quiet {
        if summary.mutations == 0 {
            println!("Session ended, catalog unchanged ({} products).", summary.product_count);
        } else {
            println!(
                "Session ended with {} local change(s), {} products. Changes are not persisted.",
                summary.mutations, summary.product_count
            );
        }
    }
    Ok(())
}
