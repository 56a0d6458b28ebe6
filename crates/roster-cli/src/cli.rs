//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use roster::{Delimiter, ImporterConfig};

/// Roster: import contacts from pasted spreadsheet text
#[derive(Parser)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the record store
    #[arg(short, long, global = true, default_value = "contacts.json")]
    pub store: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import contact rows from a file or stdin
    Import {
        /// File with pasted rows ("-" or omitted for stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Field delimiter (default: detect from the first line)
        #[arg(short, long)]
        delimiter: Option<Delimiter>,

        /// Treat the first line as data even if it looks like a header
        #[arg(long)]
        no_header_detection: bool,

        /// Output the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// List committed records
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove records by id
    Remove {
        /// Ids of the records to remove
        #[arg(value_name = "ID", required = true)]
        ids: Vec<String>,
    },

    /// Export committed records
    Export {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "tsv")]
        format: OutputFormat,
    },

    /// Show store location and size
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Build the importer configuration from import flags.
pub fn importer_config(delimiter: Option<Delimiter>, no_header_detection: bool) -> ImporterConfig {
    let mut config = ImporterConfig::new().with_header_detection(!no_header_detection);
    if let Some(d) = delimiter {
        config = config.with_delimiter(d);
    }
    config
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Tsv,
    Csv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(OutputFormat::Tsv),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use tsv, csv, or json.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Tsv => write!(f, "tsv"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
