//! Storage Layer - pluggable persistence for the four datasets
//!
//! Two backends behind one trait:
//! - `SqliteStore`: tables words/lemmas/wordroots/resemble with the primary
//!   keys from the schema module, insert-or-ignore semantics
//! - `MongoStore`: collections of the same names, unconditional insert-many,
//!   no enforced schema

pub mod mongo;
pub mod schema;
pub mod sqlite;

pub use mongo::MongoStore;
pub use sqlite::SqliteStore;

use crate::config::StoreTarget;
use crate::record::{Lemma, ResembleGroup, WordEntry, WordRoot};
use crate::Result;

/// Capability set shared by both backends.
///
/// One store instance is opened per run, used single-threaded for all four
/// datasets in order, then closed. Insert methods return the number of
/// records actually inserted (the relational backend silently skips
/// primary-key conflicts, so this can be less than the slice length).
pub trait Store {
    /// Backend name for logging ("sqlite" or "mongodb")
    fn backend_name(&self) -> &'static str;

    /// Create missing tables; no-op for schemaless backends
    fn ensure_schema(&mut self) -> Result<()>;

    fn insert_words(&mut self, entries: &[WordEntry]) -> Result<usize>;

    fn insert_lemmas(&mut self, lemmas: &[Lemma]) -> Result<usize>;

    fn insert_wordroots(&mut self, roots: &[WordRoot]) -> Result<usize>;

    fn insert_resemble(&mut self, groups: &[ResembleGroup]) -> Result<usize>;

    /// Row/document counts per dataset
    fn stats(&mut self) -> Result<StoreStats>;

    /// Release the connection; consumes the store
    fn close(self: Box<Self>) -> Result<()>;
}

/// Open the backend named by the configuration.
///
/// Connection failures are fatal for the whole run.
pub fn open_store(target: &StoreTarget) -> Result<Box<dyn Store>> {
    match target {
        StoreTarget::Sqlite { database } => Ok(Box::new(SqliteStore::open(database)?)),
        StoreTarget::Mongo { uri, database } => Ok(Box::new(MongoStore::connect(uri, database)?)),
    }
}

/// Per-dataset record counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub words: usize,
    pub lemmas: usize,
    pub wordroots: usize,
    pub resemble: usize,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Store Statistics:")?;
        writeln!(f, "  Words: {}", self.words)?;
        writeln!(f, "  Lemmas: {}", self.lemmas)?;
        writeln!(f, "  Word roots: {}", self.wordroots)?;
        writeln!(f, "  Resemble groups: {}", self.resemble)
    }
}
