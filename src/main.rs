//! Contact Book - Main entry point
//!
//! Loads the saved address book, runs the interactive session on
//! stdin/stdout and saves the book when the session ends.

use anyhow::{Context, Result};
use contact_book::cli::{Cli, Session};
use contact_book::commands::SystemClock;
use contact_book::{BookStorage, CommandProcessor, Config, JsonFileStorage};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let config = cli.apply(Config::from_env()?)?;

    // Logging goes to stderr so it never mixes with session output.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        book = %config.book_path.display(),
        window_days = config.birthday_window_days,
        "Configuration loaded"
    );

    let storage = JsonFileStorage::new(&config.book_path);
    let mut book = storage.load().with_context(|| {
        format!(
            "Failed to load address book from {}",
            config.book_path.display()
        )
    })?;

    let processor =
        CommandProcessor::with_default_commands(Box::new(SystemClock), config.birthday_window_days);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = Session::new(&processor, stdin.lock(), stdout.lock()).run(&mut book);

    // Save even if the terminal went away mid-session.
    if let Err(e) = storage.save(&book) {
        error!("Failed to save address book: {}", e);
        return Err(e).context("Failed to save address book");
    }

    let end = outcome?;
    info!(?end, contacts = book.len(), "Session finished");
    Ok(())
}
