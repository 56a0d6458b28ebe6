//! Record identifier sources.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::schema::RecordId;

/// Source of fresh record identifiers. An implementation must never hand out
/// the same id twice.
pub trait IdGenerator {
    fn next_id(&self) -> RecordId;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> RecordId {
        RecordId::new(Uuid::new_v4().to_string())
    }
}

/// Prefixed counter ids (`rec_001`, `rec_002`, ...).
///
/// Unique only within one generator, so ids from two generators with the same
/// prefix can collide.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    pub fn starting_at(prefix: impl Into<String>, first: u64) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> RecordId {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        RecordId::new(format!("{}_{:03}", self.prefix, n))
    }
}
