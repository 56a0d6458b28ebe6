//! Record validation, duplicate detection, and per-row error reporting.

mod duplicates;
mod row_error;
mod validator;

pub use duplicates::{Duplication, DuplicateTracker};
pub use row_error::{RowError, RowErrorKind};
pub use validator::{FieldViolation, RecordValidator};
