//! Roster CLI - import contacts from pasted spreadsheet text.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Import {
            file,
            delimiter,
            no_header_detection,
            json,
        } => commands::import::run(
            cli.store,
            file,
            cli::importer_config(delimiter, no_header_detection),
            json,
            cli.verbose,
        ),

        Commands::List { json } => commands::list::run(cli.store, json, cli.verbose),

        Commands::Remove { ids } => commands::remove::run(cli.store, ids, cli.verbose),

        Commands::Export { output, format } => {
            commands::export::run(cli.store, output, format, cli.verbose)
        }

        Commands::Status { json } => commands::status::run(cli.store, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "roster=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
