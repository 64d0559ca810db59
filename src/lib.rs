//! # Dictload - Dictionary Dataset Loader
//!
//! Parses ECDICT-style dictionary source files and bulk-loads them into a
//! database.
//!
//! Dictload provides:
//! - Parsers for the four source formats: tabular word entries (CSV),
//!   lemma-to-forms mappings, word roots (JSON), and resemble groups
//! - A storage trait with two backends: SQLite (relational) and MongoDB
//!   (document store)
//! - A fixed-order loader that runs all four sources against one connection

pub mod record;
pub mod parser;
pub mod storage;
pub mod loader;
pub mod config;

// Re-exports for convenient access
pub use record::{Dataset, Lemma, ResembleGroup, WordEntry, WordRoot};
pub use storage::{Store, StoreStats, open_store};
pub use loader::{LoadReport, SourceReport};

/// Result type alias for Dictload operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Dictload operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Storage error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Document store error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
