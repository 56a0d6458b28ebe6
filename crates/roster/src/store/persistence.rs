//! JSON file repository.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, RosterError};
use crate::schema::Record;

use super::repository::RecordRepository;

/// Format version written to new store files.
pub const STORE_VERSION: &str = "1.0.0";

/// On-disk layout of a record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreFile {
    /// Format version.
    pub version: String,
    /// When the store was last written.
    pub updated_at: DateTime<Utc>,
    /// Committed records in insertion order.
    pub records: Vec<Record>,
}

impl StoreFile {
    fn new(records: Vec<Record>) -> Self {
        Self {
            version: STORE_VERSION.to_string(),
            updated_at: Utc::now(),
            records,
        }
    }
}

/// Stores the collection as one pretty-printed JSON document.
///
/// A missing file reads as an empty collection; it is created on first save.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Repository backed by the file at `path`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use roster::{JsonFileRepository, RecordRepository};
    ///
    /// let repo = JsonFileRepository::new("contacts.json");
    /// println!("{} records", repo.load().unwrap().len());
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists yet.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the whole store file, or `None` if it does not exist.
    pub fn read(&self) -> Result<Option<StoreFile>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.path).map_err(|e| RosterError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        let reader = BufReader::new(file);
        let store: StoreFile = serde_json::from_reader(reader).map_err(|e| {
            RosterError::Persistence(format!(
                "Failed to parse record store '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(Some(store))
    }

    /// Sibling file a save is staged in before it replaces the store.
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_staged(staging: &Path, records: &[Record]) -> Result<()> {
        let file = File::create(staging).map_err(|e| {
            RosterError::Persistence(format!(
                "Failed to create file '{}': {}",
                staging.display(),
                e
            ))
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &StoreFile::new(records.to_vec())).map_err(|e| {
            RosterError::Persistence(format!("Failed to serialize record store: {}", e))
        })?;

        writer
            .flush()
            .and_then(|_| writer.get_ref().sync_all())
            .map_err(|e| {
                RosterError::Persistence(format!(
                    "Failed to write '{}': {}",
                    staging.display(),
                    e
                ))
            })
    }
}

impl RecordRepository for JsonFileRepository {
    fn load(&self) -> Result<Vec<Record>> {
        match self.read()? {
            Some(store) => {
                debug!(path = %self.path.display(), records = store.records.len(), "loaded record store");
                Ok(store.records)
            }
            None => {
                info!(path = %self.path.display(), "record store not found, starting empty");
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        // Create parent directory if needed
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    RosterError::Persistence(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        // The store is only replaced once the new content is fully on disk
        let staging = self.staging_path();
        if let Err(e) = Self::write_staged(&staging, records) {
            let _ = fs::remove_file(&staging);
            return Err(e);
        }

        fs::rename(&staging, &self.path).map_err(|e| {
            RosterError::Persistence(format!(
                "Failed to replace '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(path = %self.path.display(), records = records.len(), "saved record store");
        Ok(())
    }
}
