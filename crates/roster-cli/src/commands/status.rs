//! Status command - show store location and size.

use std::path::PathBuf;

use colored::Colorize;
use roster::JsonFileRepository;
use tracing::debug;

pub fn run(
    store: PathBuf,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = JsonFileRepository::new(&store);
    let file = repo.read()?;
    debug!(store = %store.display(), exists = file.is_some(), "read store status");
    let count = file.as_ref().map_or(0, |f| f.records.len());
    let updated_at = file.map(|f| f.updated_at);

    if json_output {
        let status = serde_json::json!({
            "store": store.display().to_string(),
            "exists": repo.exists(),
            "records": count,
            "updated_at": updated_at,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Record store".cyan().bold(),
        store.display().to_string().white()
    );

    match updated_at {
        Some(at) => {
            println!("  Records:      {}", count.to_string().white().bold());
            println!(
                "  Last updated: {}",
                at.format("%Y-%m-%d %H:%M:%S UTC").to_string().dimmed()
            );
        }
        None => {
            println!("  {}", "Not created yet".yellow());
            println!(
                "Run {} to create it.",
                format!("roster --store {} import <FILE>", store.display()).cyan()
            );
        }
    }

    Ok(())
}
