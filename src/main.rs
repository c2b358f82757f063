//! Contact Manager - command line entry point
//!
//! Imports contacts from the configured CSV file and prints the stored
//! collection as JSON on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use contact_manager::{import_contacts, load_contacts_file, Config, ContactManager};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(?config, "Configuration loaded successfully");

    let manager = ContactManager::new();

    if let Some(path) = &config.contacts_file {
        let rows = load_contacts_file(path)?;
        match import_contacts(&manager, &rows, config.import_mode) {
            Ok(report) => info!(
                added = report.added,
                rejected = report.rejected.len(),
                "Imported {}",
                path.display()
            ),
            Err(e) => {
                error!("Import of {} failed: {}", path.display(), e);
                return Err(e.into());
            }
        }
    }

    println!("{}", manager.export_json()?);
    Ok(())
}
