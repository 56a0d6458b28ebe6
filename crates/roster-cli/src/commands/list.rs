//! List command - print committed records.

use std::path::PathBuf;

use colored::Colorize;
use roster::{JsonFileRepository, RecordRepository};
use tracing::debug;

pub fn run(
    store: PathBuf,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let records = JsonFileRepository::new(&store).load()?;
    debug!(store = %store.display(), records = records.len(), "listing records");

    if json_output {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!(
            "{} No records in {}. Run {} to add some.",
            "Note:".yellow(),
            store.display(),
            "roster import <FILE>".cyan()
        );
        return Ok(());
    }

    println!(
        "{:36}  {:24}  {:16}  {}",
        "ID".bold(),
        "NAME".bold(),
        "PHONE".bold(),
        "EMAIL".bold()
    );
    for record in &records {
        println!(
            "{:36}  {:24}  {:16}  {}",
            record.id.as_str().dimmed(),
            record.name,
            record.phone,
            record.email
        );
    }
    println!();
    println!("{} records", records.len().to_string().white().bold());

    Ok(())
}
