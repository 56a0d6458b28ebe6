//! The long-lived record collection and the capabilities it is built from.

mod book;
mod export;
mod ids;
mod persistence;
mod repository;

pub use book::ContactBook;
pub use export::{write_delimited, write_json};
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use persistence::{JsonFileRepository, StoreFile};
pub use repository::{MemoryRepository, RecordRepository};
