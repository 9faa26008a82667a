//! Contact Assistant - Main entry point
//!
//! Loads the address book, runs the interactive command loop on stdin, and
//! saves the book when the user exits.

use anyhow::{Context, Result};
use contact_assistant::repositories::AddressBookRepository;
use contact_assistant::{run, Config, ConsoleView, JsonFileRepository, LoadOutcome, View};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logging goes to stderr; stdout belongs to the prompt
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using address book at {}", config.book_path.display());

    let repository = JsonFileRepository::new(&config.book_path);
    let LoadOutcome { mut book, backup } = repository.load_or_recover().with_context(|| {
        format!(
            "Address book at {} is unreadable and could not be moved aside",
            config.book_path.display()
        )
    })?;

    let mut view = ConsoleView::stdout();
    if let Some(backup) = backup {
        view.display_message(&format!(
            "Saved address book could not be read; it was moved to {}.",
            backup.display()
        ))?;
    }
    view.display_message("Welcome to the assistant bot!")?;

    run(io::stdin().lock(), &mut book, &mut view, config.lookahead_days)?;

    repository
        .save(&book)
        .with_context(|| format!("Failed to save address book to {}", config.book_path.display()))?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
