//! Export command - write committed records as TSV, CSV, or JSON.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use colored::Colorize;
use roster::store::{write_delimited, write_json};
use roster::{Delimiter, JsonFileRepository, RecordRepository};
use tracing::debug;

use crate::cli::OutputFormat;

pub fn run(
    store: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let records = JsonFileRepository::new(&store).load()?;
    debug!(store = %store.display(), records = records.len(), %format, "exporting");

    match output {
        Some(path) => {
            let writer = BufWriter::new(File::create(&path)?);
            write_records(&records, writer, &format)?;
            eprintln!(
                "{} {} records to {}",
                "Exported".green().bold(),
                records.len().to_string().white().bold(),
                path.display().to_string().cyan()
            );
        }
        None => write_records(&records, io::stdout().lock(), &format)?,
    }

    Ok(())
}

fn write_records<W: io::Write>(
    records: &[roster::Record],
    writer: W,
    format: &OutputFormat,
) -> roster::Result<()> {
    match format {
        OutputFormat::Tsv => write_delimited(records, writer, Delimiter::Tab),
        OutputFormat::Csv => write_delimited(records, writer, Delimiter::Comma),
        OutputFormat::Json => write_json(records, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::{Record, RecordId};
    use tempfile::TempDir;

    #[test]
    fn test_export_csv_file() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("contacts.json");
        JsonFileRepository::new(&store)
            .save(&[Record {
                id: RecordId::new("rec_001"),
                name: "Jo".to_string(),
                phone: "5551234567".to_string(),
                email: "j@x.com".to_string(),
            }])
            .unwrap();

        let out = dir.path().join("out.csv");
        run(store, Some(out.clone()), OutputFormat::Csv, false).unwrap();

        let text = std::fs::read_to_string(out).unwrap();
        assert_eq!(text, "id,name,phone,email\nrec_001,Jo,5551234567,j@x.com\n");
    }
}
