//! Import workflow over a repository.

use tracing::info;

use crate::error::{Result, RosterError};
use crate::importer::{Importer, ParseOutcome};
use crate::schema::{Record, RecordId};
use crate::validation::RowError;

use super::ids::IdGenerator;
use super::repository::RecordRepository;

/// A record collection that grows through imports.
///
/// Each import parses against the repository's current contents, commits the
/// accepted records in a single append, and replaces the remembered error list
/// (an import without errors clears it).
pub struct ContactBook<R: RecordRepository> {
    repository: R,
    importer: Importer,
    errors: Vec<RowError>,
}

impl<R: RecordRepository> ContactBook<R> {
    /// Book over `repository` with the default importer.
    pub fn new(repository: R) -> Self {
        Self::with_importer(repository, Importer::new())
    }

    pub fn with_importer(repository: R, importer: Importer) -> Self {
        Self {
            repository,
            importer,
            errors: Vec::new(),
        }
    }

    /// Parse `text` and commit whatever it accepts.
    pub fn import(&mut self, text: &str, ids: &dyn IdGenerator) -> Result<ParseOutcome> {
        let existing = self.repository.load()?;
        let outcome = self.importer.parse(text, &existing, ids);

        if !outcome.accepted.is_empty() {
            self.repository.append(&outcome.accepted)?;
            info!(
                added = outcome.accepted.len(),
                total = existing.len() + outcome.accepted.len(),
                "records committed"
            );
        }
        self.errors = outcome.errors.clone();

        Ok(outcome)
    }

    /// Errors from the most recent import.
    pub fn errors(&self) -> &[RowError] {
        &self.errors
    }

    /// Every committed record.
    pub fn records(&self) -> Result<Vec<Record>> {
        self.repository.load()
    }

    /// Remove one record.
    pub fn remove(&mut self, id: &RecordId) -> Result<Record> {
        self.repository
            .remove_by_id(id)?
            .ok_or_else(|| RosterError::NotFound(id.to_string()))
    }

    /// Remove every record whose id is listed, in one write. Unknown ids are
    /// ignored; the removed records are returned.
    pub fn remove_many(&mut self, ids: &[RecordId]) -> Result<Vec<Record>> {
        let (removed, kept): (Vec<Record>, Vec<Record>) = self
            .repository
            .load()?
            .into_iter()
            .partition(|record| ids.contains(&record.id));

        if !removed.is_empty() {
            self.repository.save(&kept)?;
        }
        Ok(removed)
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}
