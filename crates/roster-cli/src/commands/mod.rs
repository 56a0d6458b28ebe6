//! CLI command implementations.

pub mod export;
pub mod import;
pub mod list;
pub mod remove;
pub mod status;
