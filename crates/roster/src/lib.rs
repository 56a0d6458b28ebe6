//! Roster: contact-record ingestion from pasted spreadsheet text.
//!
//! Text copied out of a spreadsheet or a delimited file is turned into
//! validated contact records. Columns are recognised by what they contain
//! rather than where they are, and every row is accepted or rejected on its
//! own with a message naming its line number.
//!
//! # Pipeline
//!
//! - **Delimiter**: tab or comma, sniffed from the first line
//! - **Header**: a first line of column labels is skipped
//! - **Classification**: each field becomes a name, phone or email by shape
//! - **Validation**: every field must match its format
//! - **Duplicates**: a repeated email (any case) or phone is rejected
//!
//! # Example
//!
//! ```
//! use roster::{Importer, SequentialIds};
//!
//! let importer = Importer::new();
//! let ids = SequentialIds::new("rec");
//! let outcome = importer.parse("name\tphone\temail\nJo\t5551234567\tj@x.com", &[], &ids);
//!
//! assert_eq!(outcome.accepted.len(), 1);
//! assert!(outcome.errors.is_empty());
//! ```

pub mod error;
pub mod input;
pub mod schema;
pub mod store;
pub mod validation;

mod importer;

pub use crate::importer::{FIELDS_PER_ROW, ImportSummary, Importer, ImporterConfig, ParseOutcome};
pub use error::{Result, RosterError};
pub use input::Delimiter;
pub use schema::{Record, RecordId, Role, classify};
pub use store::{
    ContactBook, IdGenerator, JsonFileRepository, MemoryRepository, RecordRepository,
    SequentialIds, UuidGenerator,
};
pub use validation::{RowError, RowErrorKind};
