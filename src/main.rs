//! Shelfr CLI application entry point
//!
//! This is the main executable for the shelfr catalog viewer. It fetches the
//! product collection from the configured HTTP endpoint once, then runs a
//! single command against the in-memory copy. Nothing is ever written back
//! to the remote API; add/edit/delete are local to the invocation.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog interactively (default command)
//! shelfr
//! shelfr browse
//!
//! # Print a page of the catalog
//! shelfr list
//! shelfr list --page 3
//!
//! # Filter by title
//! shelfr search shirt
//! shelfr s shirt --page 2
//!
//! # Local mutations (printed, not persisted)
//! shelfr add --title "Mug" --price 4.50
//! shelfr edit 3 --title "Renamed"
//! shelfr delete 3 --yes
//!
//! # Scripting
//! shelfr --quiet list
//! shelfr --json search shirt
//!
//! # Configuration
//! shelfr config set items_per_page=10
//! shelfr config get api_url
//! ```
//!
//! # Configuration
//!
//! On first run, shelfr will prompt for the catalog endpoint. Configuration
//! is stored in the user's config directory
//! (`~/.config/shelfr/config.toml` on Linux).

use colored::Colorize;
use shelfr::{
    ShelfrError,
    api::CatalogClient,
    catalog::CatalogStore,
    cli::{Cli, Commands, ConfigCommands},
    commands,
    config::ShelfrConfig,
};

type Result<T> = std::result::Result<T, ShelfrError>;

fn main() {
    let cli = Cli::parse_args();

    if let Err(e) = run(&cli) {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match cli.get_command() {
        Commands::Config { command } => handle_config(&command),
        command => run_catalog_command(cli, command),
    }
}

/// Fetch the catalog, seed the store, and dispatch one command against it
fn run_catalog_command(cli: &Cli, command: Commands) -> Result<()> {
    let config = ShelfrConfig::load_or_setup()?;
    let quiet = cli.quiet || config.quiet;

    let api_url = cli.api_url.clone().unwrap_or_else(|| config.api_url.clone());
    let client = CatalogClient::new(api_url, config.timeout())?;

    if !quiet && !cli.json {
        println!("Fetching catalog from {}...", client.url().dimmed());
    }
    let products = client.fetch_products()?;

    let mut store = CatalogStore::new(config.items_per_page);
    store.seed(products);

    match command {
        Commands::Browse => commands::browse::execute(store, quiet),
        Commands::List { page } => commands::list::list(&mut store, page, quiet, cli.json),
        Commands::Search { query, page } => {
            commands::list::search(&mut store, &query, page, quiet, cli.json)
        }
        Commands::Show { id } => commands::list::show(&store, id, quiet, cli.json),
        Commands::Add { fields } => commands::mutate::add(&mut store, &fields, quiet, cli.json),
        Commands::Edit { id, fields } => {
            commands::mutate::edit(&mut store, id, &fields, quiet, cli.json)
        }
        Commands::Delete { id, yes } => commands::mutate::delete(&mut store, id, yes, quiet),
        Commands::Config { command } => handle_config(&command),
    }
}

/// Handle `shelfr config` subcommands; these never touch the network
fn handle_config(command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let Some((key, value)) = setting.split_once('=') else {
                return Err(ShelfrError::InvalidInput(format!(
                    "Expected KEY=VALUE, got '{setting}'"
                )));
            };

            let mut config = ShelfrConfig::load_or_setup()?;
            config.set_value(key.trim(), value.trim())?;
            config.save()?;
            println!("{} {} = {}", "✓".green(), key.trim(), value.trim());
            Ok(())
        }

        ConfigCommands::Get { key } => {
            let config = ShelfrConfig::load_or_setup()?;
            match config.get_value(key) {
                Some(value) => {
                    println!("{value}");
                    Ok(())
                }
                None => Err(ShelfrError::InvalidInput(format!("Unknown config key '{key}'"))),
            }
        }

        ConfigCommands::Path => {
            let path = ShelfrConfig::config_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
