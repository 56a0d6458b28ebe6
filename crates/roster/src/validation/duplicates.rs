//! Occurrence counting for email and phone values within one import.

use std::collections::HashMap;

use crate::schema::Record;

/// Which values of a row were seen before.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Duplication {
    pub email: bool,
    pub phone: bool,
}

impl Duplication {
    pub fn is_duplicate(&self) -> bool {
        self.email || self.phone
    }
}

/// Counts email (case-insensitive) and phone (exact) occurrences.
///
/// A tracker lives for one import. It is seeded with one occurrence for every
/// value already in the committed collection, so only the first batch row
/// carrying a new value gets through and rows repeating a committed value are
/// flagged.
#[derive(Debug, Clone, Default)]
pub struct DuplicateTracker {
    emails: HashMap<String, usize>,
    phones: HashMap<String, usize>,
}

impl DuplicateTracker {
    /// Empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker seeded from the committed collection.
    pub fn seeded(existing: &[Record]) -> Self {
        let mut tracker = Self::new();
        for record in existing {
            tracker.emails.insert(record.email_key(), 1);
            tracker.phones.insert(record.phone.clone(), 1);
        }
        tracker
    }

    /// Count one more occurrence of `email` and `phone` and report which of
    /// them have now been seen more than once.
    pub fn observe(&mut self, email: &str, phone: &str) -> Duplication {
        let email_count = self.emails.entry(email.to_lowercase()).or_insert(0);
        *email_count += 1;
        let phone_count = self.phones.entry(phone.to_string()).or_insert(0);
        *phone_count += 1;

        Duplication {
            email: *email_count > 1,
            phone: *phone_count > 1,
        }
    }
}
