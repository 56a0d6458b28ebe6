//! Import command - parse pasted rows and commit the accepted ones.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use colored::Colorize;
use roster::{ContactBook, Importer, ImporterConfig, JsonFileRepository, UuidGenerator};
use tracing::debug;

pub fn run(
    store: PathBuf,
    file: Option<PathBuf>,
    config: ImporterConfig,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(file.as_deref())?;
    debug!(store = %store.display(), bytes = text.len(), "importing");

    let mut book = ContactBook::with_importer(
        JsonFileRepository::new(&store),
        Importer::with_config(config),
    );
    let outcome = book.import(&text, &UuidGenerator)?;

    if json_output {
        let report = serde_json::json!({
            "store": store.display().to_string(),
            "delimiter": outcome.delimiter,
            "header_skipped": outcome.header_skipped,
            "accepted": outcome.accepted,
            "errors": outcome.error_messages(),
            "summary": outcome.summary(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if verbose {
        println!(
            "Delimiter: {}, header {}",
            outcome.delimiter.to_string().cyan(),
            if outcome.header_skipped { "skipped" } else { "not detected" }
        );
        for record in &outcome.accepted {
            println!(
                "  {} {} {} {}",
                "+".green(),
                record.name.white(),
                record.phone,
                record.email
            );
        }
    }

    println!(
        "{} {} of {} rows into {}",
        "Imported".green().bold(),
        outcome.accepted.len().to_string().white().bold(),
        outcome.data_rows,
        store.display()
    );

    if !outcome.errors.is_empty() {
        println!();
        println!(
            "{} ({})",
            "Errors:".red().bold(),
            outcome.errors.len()
        );
        for message in outcome.error_messages() {
            println!("  {} {}", "•".dimmed(), message);
        }
    }

    Ok(())
}

/// Read the whole input from a file, or from stdin for `-` or no file.
fn read_input(file: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match file {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                return Err(format!("File not found: {}", path.display()).into());
            }
            debug!(path = %path.display(), "reading input file");
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            debug!("reading input from stdin");
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
