//! Property-based tests for the import pipeline.
//!
//! These tests use proptest to generate pasted text and verify that the
//! importer keeps its invariants under all conditions.
//!
//! # Running Property Tests
//!
//! ```bash
//! # Run all property tests
//! cargo test -p roster --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p roster --test property_tests
//! ```

use std::collections::HashSet;

use proptest::prelude::*;

use roster::input::HeaderDetector;
use roster::{Importer, Record, Role, SequentialIds, classify};

// =============================================================================
// Test Strategies
// =============================================================================

/// Names that contain none of the header keywords.
fn name_like() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,8}( [A-Z][a-z]{1,8})?".prop_filter("no header keywords", |s| {
        !HeaderDetector::new().detect(s).is_header()
    })
}

fn phone_like() -> impl Strategy<Value = String> {
    "\\+?[0-9]{10,14}"
}

fn email_like() -> impl Strategy<Value = String> {
    "[a-z]{1,6}@[a-z]{1,6}\\.(com|org|net)".prop_filter("no header keywords", |s| {
        !HeaderDetector::new().detect(s).is_header()
    })
}

/// A well-formed row in a random column order.
fn valid_row() -> impl Strategy<Value = Vec<String>> {
    (name_like(), phone_like(), email_like())
        .prop_map(|(n, p, e)| vec![n, p, e])
        .prop_shuffle()
}

/// Any line, including malformed ones.
fn any_line() -> impl Strategy<Value = String> {
    prop_oneof![
        valid_row().prop_map(|fields| fields.join("\t")),
        valid_row().prop_map(|fields| fields.join(",")),
        "[a-zA-Z0-9@.,\"\t +-]{0,40}",
    ]
}

fn any_text() -> impl Strategy<Value = String> {
    prop::collection::vec(any_line(), 0..20).prop_map(|lines| lines.join("\n"))
}

fn parse(text: &str, existing: &[Record]) -> roster::ParseOutcome {
    Importer::new().parse(text, existing, &SequentialIds::new("p"))
}

// =============================================================================
// Import Properties
// =============================================================================

proptest! {
    /// Every data row is accepted, rejected, or neither; never both.
    #[test]
    fn accepted_and_rejected_rows_fit_in_data_rows(text in any_text()) {
        let outcome = parse(&text, &[]);
        prop_assert!(outcome.accepted.len() + outcome.rejected_rows() <= outcome.data_rows);
    }

    /// Accepted records never share an email (any case) or a phone.
    #[test]
    fn accepted_records_are_unique(text in any_text()) {
        let outcome = parse(&text, &[]);

        let emails: HashSet<String> = outcome.accepted.iter().map(|r| r.email_key()).collect();
        let phones: HashSet<&str> = outcome.accepted.iter().map(|r| r.phone.as_str()).collect();
        prop_assert_eq!(emails.len(), outcome.accepted.len());
        prop_assert_eq!(phones.len(), outcome.accepted.len());
    }

    /// Error rows are reported in input order.
    #[test]
    fn errors_in_row_order(text in any_text()) {
        let outcome = parse(&text, &[]);
        let rows: Vec<usize> = outcome.errors.iter().map(|e| e.row).collect();
        let mut sorted = rows.clone();
        sorted.sort();
        prop_assert_eq!(rows, sorted);
    }

    /// Importing the same text against the first run's records adds nothing
    /// and reports every first-run acceptance as a duplicate.
    #[test]
    fn reimport_is_idempotent(rows in prop::collection::vec(valid_row(), 1..10)) {
        let text = rows.iter().map(|r| r.join("\t")).collect::<Vec<_>>().join("\n");

        let first = parse(&text, &[]);
        let second = parse(&text, &first.accepted);

        prop_assert!(second.accepted.is_empty());
        prop_assert_eq!(second.rejected_rows(), second.data_rows);
        let duplicates = second
            .errors
            .iter()
            .filter(|e| e.kind.key() == "duplicate")
            .count();
        prop_assert_eq!(duplicates, second.data_rows);
    }

    /// Role assignment ignores column position.
    #[test]
    fn role_independent_of_position(row in valid_row()) {
        let forward = parse(&row.join("\t"), &[]);
        let mut reversed = row.clone();
        reversed.reverse();
        let backward = parse(&reversed.join("\t"), &[]);

        prop_assert_eq!(forward.accepted.len(), 1);
        prop_assert_eq!(backward.accepted.len(), 1);
        prop_assert_eq!(&forward.accepted[0].email, &backward.accepted[0].email);
        prop_assert_eq!(&forward.accepted[0].phone, &backward.accepted[0].phone);
        prop_assert_eq!(&forward.accepted[0].name, &backward.accepted[0].name);
    }

    /// The importer never panics, whatever it is given.
    #[test]
    fn never_panics(text in "\\PC{0,200}") {
        let _ = parse(&text, &[]);
    }

    /// Classification depends only on the trimmed value.
    #[test]
    fn classify_ignores_surrounding_whitespace(value in "[a-z0-9@.+]{0,20}", pad in "[ \t]{0,3}") {
        let padded = format!("{}{}{}", pad, value, pad);
        prop_assert_eq!(classify(&padded), classify(&value));
    }
}

// =============================================================================
// Header Properties
// =============================================================================

proptest! {
    /// One keyword from any category, in any column, makes a header.
    #[test]
    fn single_keyword_makes_header(
        keyword in prop_oneof![
            Just("Name"), Just("Customer"), Just("Email"), Just("E-mail"),
            Just("Phone"), Just("Mobile"), Just("Number"), Just("Tel"),
        ],
        filler in "[0-9]{1,5}",
        position in 0usize..3,
    ) {
        let mut columns = vec![filler.clone(), filler.clone(), filler];
        columns[position] = keyword.to_string();
        prop_assert!(HeaderDetector::new().detect(&columns.join("\t")).is_header());
    }
}

#[test]
fn phone_only_header_is_skipped() {
    let outcome = parse("x\ttelephone\ty\nJo\t5551234567\tj@x.com", &[]);
    assert!(outcome.header_skipped);
    assert_eq!(outcome.accepted.len(), 1);
    assert_eq!(classify("telephone"), Role::Name);
}
