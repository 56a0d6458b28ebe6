//! Storage interface for committed records.

use crate::error::Result;
use crate::schema::{Record, RecordId};

/// Where committed records live between imports.
///
/// `append` and `remove_by_id` have default implementations in terms of
/// `load` and `save`, so a backend only has to provide whole-collection reads
/// and writes.
pub trait RecordRepository {
    /// Read every committed record, in insertion order.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the stored collection.
    fn save(&mut self, records: &[Record]) -> Result<()>;

    /// Add records to the end of the collection in one write.
    fn append(&mut self, records: &[Record]) -> Result<()> {
        let mut all = self.load()?;
        all.extend_from_slice(records);
        self.save(&all)
    }

    /// Remove a record. Returns the removed record, or `None` if no record
    /// has this id.
    fn remove_by_id(&mut self, id: &RecordId) -> Result<Option<Record>> {
        let mut all = self.load()?;
        let Some(index) = all.iter().position(|r| &r.id == id) else {
            return Ok(None);
        };
        let removed = all.remove(index);
        self.save(&all)?;
        Ok(Some(removed))
    }
}

/// In-memory repository; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    records: Vec<Record>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-filled with records.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordRepository for MemoryRepository {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.records = records.to_vec();
        Ok(())
    }

    fn append(&mut self, records: &[Record]) -> Result<()> {
        self.records.extend_from_slice(records);
        Ok(())
    }
}
