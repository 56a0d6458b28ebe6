//! Per-row problems collected during an import.

use serde::{Deserialize, Serialize};

use crate::schema::Role;

use super::duplicates::Duplication;

/// Why a row was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum RowErrorKind {
    /// The row did not split into exactly three fields.
    FieldCount { found: usize },
    /// A classified field failed its format rule.
    InvalidField { field: Role },
    /// Email and/or phone already present in the collection or earlier in the batch.
    Duplicate {
        email: bool,
        phone: bool,
    },
}

impl RowErrorKind {
    /// Stable snake_case key, used for grouping in summaries.
    pub fn key(&self) -> &'static str {
        match self {
            RowErrorKind::FieldCount { .. } => "field_count",
            RowErrorKind::InvalidField { field: Role::Name } => "invalid_name",
            RowErrorKind::InvalidField { field: Role::Phone } => "invalid_phone",
            RowErrorKind::InvalidField { field: Role::Email } => "invalid_email",
            RowErrorKind::Duplicate { .. } => "duplicate",
        }
    }
}

impl From<Duplication> for RowErrorKind {
    fn from(dup: Duplication) -> Self {
        RowErrorKind::Duplicate {
            email: dup.email,
            phone: dup.phone,
        }
    }
}

/// A problem with one input line. Displays as the message shown to users,
/// e.g. `Invalid phone at Row 3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    /// 1-based line number in the pasted text, header line included.
    pub row: usize,
    #[serde(flatten)]
    pub kind: RowErrorKind,
}

impl RowError {
    pub fn new(row: usize, kind: RowErrorKind) -> Self {
        Self { row, kind }
    }

    pub fn field_count(row: usize, found: usize) -> Self {
        Self::new(row, RowErrorKind::FieldCount { found })
    }

    pub fn invalid_field(row: usize, field: Role) -> Self {
        Self::new(row, RowErrorKind::InvalidField { field })
    }

    pub fn duplicate(row: usize, dup: Duplication) -> Self {
        Self::new(row, dup.into())
    }
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            RowErrorKind::FieldCount { .. } => {
                write!(f, "Invalid number of fields at Row {}", self.row)
            }
            RowErrorKind::InvalidField { field } => {
                write!(f, "Invalid {} at Row {}", field.label(), self.row)
            }
            RowErrorKind::Duplicate { email, phone } => {
                let what = match (email, phone) {
                    (true, true) => "email and phone",
                    (true, false) => "email",
                    _ => "phone",
                };
                write!(f, "Duplicate {} at Row {}", what, self.row)
            }
        }
    }
}
