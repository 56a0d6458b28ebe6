//! The import pipeline: pasted text in, accepted records and row errors out.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::input::{Delimiter, HeaderDetector, detect_delimiter, raw_lines, split_row};
use crate::schema::{ClassifiedFields, Record};
use crate::store::IdGenerator;
use crate::validation::{DuplicateTracker, RecordValidator, RowError};

/// Number of fields every data row must have.
pub const FIELDS_PER_ROW: usize = 3;

/// Configuration for an [`Importer`].
#[derive(Debug, Clone)]
pub struct ImporterConfig {
    /// Delimiter to use (None = detect from the first line).
    pub delimiter: Option<Delimiter>,
    /// Whether to look for a header in the first line.
    pub detect_header: bool,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            detect_header: true,
        }
    }
}

impl ImporterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a delimiter instead of detecting it.
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Enable or disable header detection.
    pub fn with_header_detection(mut self, enabled: bool) -> Self {
        self.detect_header = enabled;
        self
    }
}

/// Result of one import.
///
/// Both lists are in input order. Row numbers count every line of the pasted
/// text, the header line included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Records that passed validation and were not duplicates.
    pub accepted: Vec<Record>,
    /// Every problem found, one entry per problem.
    pub errors: Vec<RowError>,
    /// Delimiter used to split rows.
    pub delimiter: Delimiter,
    /// Whether the first line was skipped as a header.
    pub header_skipped: bool,
    /// Number of lines treated as data.
    pub data_rows: usize,
}

impl ParseOutcome {
    fn empty(delimiter: Delimiter) -> Self {
        Self {
            accepted: Vec::new(),
            errors: Vec::new(),
            delimiter,
            header_skipped: false,
            data_rows: 0,
        }
    }

    /// Whether the import produced no errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors rendered as user-facing messages.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// Number of distinct rows with at least one error.
    pub fn rejected_rows(&self) -> usize {
        let mut rows: Vec<usize> = self.errors.iter().map(|e| e.row).collect();
        rows.dedup();
        rows.len()
    }

    /// Counts for reporting.
    pub fn summary(&self) -> ImportSummary {
        let mut errors_by_kind = IndexMap::new();
        for error in &self.errors {
            *errors_by_kind.entry(error.kind.key().to_string()).or_insert(0) += 1;
        }

        ImportSummary {
            data_rows: self.data_rows,
            accepted: self.accepted.len(),
            rejected_rows: self.rejected_rows(),
            errors_by_kind,
        }
    }
}

/// Summary counts of a [`ParseOutcome`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Lines treated as data.
    pub data_rows: usize,
    /// Records accepted.
    pub accepted: usize,
    /// Rows with at least one error.
    pub rejected_rows: usize,
    /// Error counts keyed by kind, in order of first appearance.
    pub errors_by_kind: IndexMap<String, usize>,
}

/// Turns pasted contact rows into records.
///
/// One call to [`Importer::parse`] runs the whole pipeline: delimiter and
/// header detection, splitting, classification, validation, and duplicate
/// checks against both the batch and the caller's existing records. Nothing
/// outside the returned [`ParseOutcome`] is modified.
pub struct Importer {
    config: ImporterConfig,
    header: HeaderDetector,
    validator: RecordValidator,
}

impl Importer {
    /// Create an importer with default configuration.
    pub fn new() -> Self {
        Self::with_config(ImporterConfig::default())
    }

    /// Create an importer with custom configuration.
    pub fn with_config(config: ImporterConfig) -> Self {
        Self {
            config,
            header: HeaderDetector::new(),
            validator: RecordValidator::new(),
        }
    }

    /// Parse pasted text against the records already committed.
    ///
    /// Every data row is accepted or rejected on its own; a bad row never
    /// stops the scan. `ids` is asked for one id per accepted record; rows
    /// rejected for any reason do not consume one.
    pub fn parse(&self, text: &str, existing: &[Record], ids: &dyn IdGenerator) -> ParseOutcome {
        let delimiter = self
            .config
            .delimiter
            .unwrap_or_else(|| detect_delimiter(text));
        debug!(%delimiter, "splitting rows");

        let mut outcome = ParseOutcome::empty(delimiter);
        let mut lines = raw_lines(text).enumerate().peekable();

        if self.config.detect_header {
            if let Some(&(_, first)) = lines.peek() {
                let header = self.header.detect(first);
                if header.is_header() {
                    debug!(line = first, roles = ?header.roles, "skipping header row");
                    outcome.header_skipped = true;
                    lines.next();
                }
            }
        }

        let mut tracker = DuplicateTracker::seeded(existing);

        for (index, line) in lines {
            let row = index + 1;
            outcome.data_rows += 1;

            let fields = split_row(line, delimiter);
            if fields.len() != FIELDS_PER_ROW {
                debug!(row, found = fields.len(), "wrong number of fields");
                outcome.errors.push(RowError::field_count(row, fields.len()));
                continue;
            }

            let classified = ClassifiedFields::from_fields(fields);
            let candidate = match self.validator.validate(classified) {
                Ok(fields) => fields,
                Err(violations) => {
                    for violation in violations {
                        debug!(row, field = violation.field.label(), value = %violation.value, "invalid field");
                        outcome.errors.push(RowError::invalid_field(row, violation.field));
                    }
                    continue;
                }
            };

            let duplication = tracker.observe(&candidate.email, &candidate.phone);
            if duplication.is_duplicate() {
                debug!(row, email = duplication.email, phone = duplication.phone, "duplicate row");
                outcome.errors.push(RowError::duplicate(row, duplication));
                continue;
            }

            outcome.accepted.push(candidate.into_record(ids.next_id()));
        }

        info!(
            data_rows = outcome.data_rows,
            accepted = outcome.accepted.len(),
            errors = outcome.errors.len(),
            "import parsed"
        );

        outcome
    }
}

impl Default for Importer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RecordId;
    use crate::store::SequentialIds;

    fn parse(text: &str) -> ParseOutcome {
        Importer::new().parse(text, &[], &SequentialIds::new("rec"))
    }

    #[test]
    fn test_single_tab_row() {
        let outcome = parse("Jo\t5551234567\tj@x.com");

        assert!(outcome.is_clean());
        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.accepted[0].name, "Jo");
        assert_eq!(outcome.delimiter, Delimiter::Tab);
        assert!(!outcome.header_skipped);
    }

    #[test]
    fn test_header_shifts_row_numbers() {
        let outcome = parse("name\tphone\temail\nJo\t5551234567\tj@x.com\nAl\t12\ta@x.com");

        assert!(outcome.header_skipped);
        assert_eq!(outcome.data_rows, 2);
        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.error_messages(), vec!["Invalid phone at Row 3"]);
    }

    #[test]
    fn test_header_detection_disabled() {
        let importer = Importer::with_config(ImporterConfig::new().with_header_detection(false));
        let outcome = importer.parse(
            "name\tphone\temail\nJo\t5551234567\tj@x.com",
            &[],
            &SequentialIds::new("rec"),
        );

        assert!(!outcome.header_skipped);
        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(
            outcome.error_messages(),
            vec!["Invalid phone at Row 1", "Invalid email at Row 1"]
        );
    }

    #[test]
    fn test_forced_delimiter() {
        let importer = Importer::with_config(ImporterConfig::new().with_delimiter(Delimiter::Comma));
        let outcome = importer.parse(
            "Jo,5551234567,j@x.com",
            &[],
            &SequentialIds::new("rec"),
        );
        assert_eq!(outcome.delimiter, Delimiter::Comma);
        assert_eq!(outcome.accepted.len(), 1);
    }

    #[test]
    fn test_one_error_per_invalid_field() {
        let outcome = parse("\t\tnope@x");

        assert!(outcome.accepted.is_empty());
        assert_eq!(
            outcome.error_messages(),
            vec![
                "Invalid name at Row 1",
                "Invalid phone at Row 1",
                "Invalid email at Row 1"
            ]
        );
        assert_eq!(outcome.rejected_rows(), 1);
    }

    #[test]
    fn test_duplicate_of_existing_record() {
        let existing = vec![Record {
            id: RecordId::new("old"),
            name: "Jo".to_string(),
            phone: "5551234567".to_string(),
            email: "j@x.com".to_string(),
        }];
        let outcome = Importer::new().parse(
            "Jo\t5551234567\tJ@X.com\nAl\t5550000000\ta@x.com",
            &existing,
            &SequentialIds::new("rec"),
        );

        assert_eq!(outcome.error_messages(), vec!["Duplicate email and phone at Row 1"]);
        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.accepted[0].email, "a@x.com");
    }

    #[test]
    fn test_empty_input() {
        let outcome = parse("");
        assert!(outcome.is_clean());
        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.data_rows, 0);
    }

    #[test]
    fn test_header_only() {
        let outcome = parse("Name,Phone,Email\n");
        assert!(outcome.header_skipped);
        assert_eq!(outcome.data_rows, 0);
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_rejected_rows_do_not_consume_ids() {
        let outcome = parse(
            "Jo\t123\tj@x.com\nAl\t5550000000\ta@x.com\nAl\t5550000000\ta@x.com\nBo\t5551111111\tb@x.com",
        );

        assert_eq!(outcome.errors.len(), 2);
        let ids: Vec<&str> = outcome.accepted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["rec_001", "rec_002"]);
    }

    #[test]
    fn test_summary_groups_errors() {
        let outcome = parse("Jo\t5551234567\tj@x.com\nJo\t5551234567\tj@x.com\nbad\nx\t1\ty@x.com");
        let summary = outcome.summary();

        assert_eq!(summary.data_rows, 4);
        assert_eq!(summary.accepted, 1);
        assert_eq!(summary.rejected_rows, 3);
        assert_eq!(summary.errors_by_kind.get("duplicate"), Some(&1));
        assert_eq!(summary.errors_by_kind.get("field_count"), Some(&1));
        assert_eq!(summary.errors_by_kind.get("invalid_phone"), Some(&1));
        let order: Vec<&str> = summary.errors_by_kind.keys().map(|k| k.as_str()).collect();
        assert_eq!(order, vec!["duplicate", "field_count", "invalid_phone"]);
    }
}
