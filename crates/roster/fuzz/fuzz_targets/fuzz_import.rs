//! Fuzz target for the import pipeline.
//!
//! This fuzzer checks that the importer:
//! 1. Never panics on malformed input
//! 2. Never accepts more rows than it scanned
//! 3. Never accepts two records sharing an email or phone

#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;
use roster::{Importer, SequentialIds};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let outcome = Importer::new().parse(text, &[], &SequentialIds::new("fuzz"));
    assert!(outcome.accepted.len() + outcome.rejected_rows() <= outcome.data_rows);

    let emails: HashSet<String> = outcome.accepted.iter().map(|r| r.email_key()).collect();
    let phones: HashSet<&str> = outcome.accepted.iter().map(|r| r.phone.as_str()).collect();
    assert_eq!(emails.len(), outcome.accepted.len());
    assert_eq!(phones.len(), outcome.accepted.len());
});
