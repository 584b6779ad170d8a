//! Address Book - Main entry point
//!
//! Loads the address book, saves it back, then runs a single search read from
//! stdin and prints the matching contacts.

use address_book::{AddressBook, Config, Record};
use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const NO_RESULTS_MESSAGE: &str = "No results found";

fn main() -> Result<()> {
    let config = Config::from_env();

    // Logs go to stderr so stdout carries only program output
    let log_level = match &config {
        Ok(cfg) => cfg.log_level.clone(),
        Err(_) => Config::default().log_level,
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Using address book at {}", config.book_path.display());

    let book = match AddressBook::open(&config.book_path) {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };
    book.save_to_file(&config.book_path)?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "Enter search query: ")?;
    stdout.flush()?;

    let mut query = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut query)
        .context("Failed to read search query")?;
    if read == 0 {
        bail!("No search query provided: stdin is closed");
    }
    let query = query.trim_end_matches(['\r', '\n']);

    print_results(&mut stdout, &book.search(query))?;
    Ok(())
}

/// Print each record on its own line, or the no-results message.
fn print_results(out: &mut impl Write, results: &[Record]) -> io::Result<()> {
    if results.is_empty() {
        return writeln!(out, "{}", NO_RESULTS_MESSAGE);
    }

    writeln!(out, "Search results: ")?;
    for record in results {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}
