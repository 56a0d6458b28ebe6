//! The contact record and its field formats.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Accepted phone shape: optional leading `+`, then 10 to 14 digits.
pub const PHONE_PATTERN: &str = r"^\+?[0-9]{10,14}$";

/// Accepted email shape.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(PHONE_PATTERN).unwrap());
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).unwrap());

/// Whether `value` is a phone number in the accepted shape. No trimming.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Whether `value` is an email address in the accepted shape. No trimming.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Opaque unique identifier of a committed record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier from the caller's id source.
    pub id: RecordId,
    /// Non-empty display name.
    pub name: String,
    /// Phone number matching [`PHONE_PATTERN`].
    pub phone: String,
    /// Email address matching [`EMAIL_PATTERN`], original case preserved.
    pub email: String,
}

impl Record {
    /// Email in the form used for duplicate comparison.
    pub fn email_key(&self) -> String {
        self.email.to_lowercase()
    }
}
