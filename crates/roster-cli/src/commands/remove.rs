//! Remove command - delete records by id.

use std::path::PathBuf;

use colored::Colorize;
use roster::{ContactBook, JsonFileRepository, RecordId};
use tracing::debug;

pub fn run(
    store: PathBuf,
    ids: Vec<String>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !store.exists() {
        return Err(format!("Record store not found: {}", store.display()).into());
    }

    let ids: Vec<RecordId> = ids.into_iter().map(RecordId::from).collect();
    debug!(store = %store.display(), requested = ids.len(), "removing records");
    let mut book = ContactBook::new(JsonFileRepository::new(&store));
    let removed = book.remove_many(&ids)?;

    if verbose {
        for record in &removed {
            println!("  {} {} {}", "-".red(), record.id, record.name);
        }
    }

    let unknown: Vec<&RecordId> = ids
        .iter()
        .filter(|id| !removed.iter().any(|r| &r.id == *id))
        .collect();
    for id in &unknown {
        println!("{} No record with id {}", "Warning:".yellow().bold(), id);
    }

    println!(
        "{} {} record(s)",
        "Removed".green().bold(),
        removed.len().to_string().white().bold()
    );

    Ok(())
}
