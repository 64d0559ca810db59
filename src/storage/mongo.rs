//! MongoDB storage implementation
//!
//! Uses the driver's blocking API: the whole load is single-threaded and
//! strictly sequential, so nothing here suspends.

use mongodb::bson::doc;
use mongodb::sync::{Client, Database};
use serde::Serialize;

use super::{Store, StoreStats};
use crate::record::{Dataset, Lemma, ResembleGroup, WordEntry, WordRoot};
use crate::{Error, Result};

/// MongoDB-backed storage for the dictionary datasets.
///
/// Collections carry no uniqueness constraints: every insert is
/// unconditional, and re-running a load duplicates documents.
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Connect to a MongoDB deployment and select a database.
    ///
    /// The driver connects lazily, so a ping is issued here to make
    /// connection failure fail the run up front rather than on the first
    /// insert.
    pub fn connect(uri: &str, db_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .map_err(|e| Error::Connection(format!("invalid MongoDB URI {}: {}", uri, e)))?;
        let db = client.database(db_name);
        db.run_command(doc! { "ping": 1 })
            .run()
            .map_err(|e| Error::Connection(format!("cannot reach MongoDB at {}: {}", uri, e)))?;
        Ok(Self { db })
    }

    fn insert_all<T: Serialize + Send + Sync>(
        &self,
        dataset: Dataset,
        records: &[T],
    ) -> Result<usize> {
        // insert_many rejects an empty batch
        if records.is_empty() {
            return Ok(0);
        }
        let result = self
            .db
            .collection::<T>(dataset.as_str())
            .insert_many(records)
            .run()?;
        Ok(result.inserted_ids.len())
    }

    fn count(&self, dataset: Dataset) -> Result<usize> {
        let count = self
            .db
            .collection::<mongodb::bson::Document>(dataset.as_str())
            .count_documents(doc! {})
            .run()?;
        Ok(count as usize)
    }
}

impl Store for MongoStore {
    fn backend_name(&self) -> &'static str {
        "mongodb"
    }

    /// No-op: collections are created on first insert and carry no schema
    fn ensure_schema(&mut self) -> Result<()> {
        Ok(())
    }

    fn insert_words(&mut self, entries: &[WordEntry]) -> Result<usize> {
        self.insert_all(Dataset::Words, entries)
    }

    fn insert_lemmas(&mut self, lemmas: &[Lemma]) -> Result<usize> {
        self.insert_all(Dataset::Lemmas, lemmas)
    }

    fn insert_wordroots(&mut self, roots: &[WordRoot]) -> Result<usize> {
        self.insert_all(Dataset::WordRoots, roots)
    }

    fn insert_resemble(&mut self, groups: &[ResembleGroup]) -> Result<usize> {
        self.insert_all(Dataset::Resemble, groups)
    }

    fn stats(&mut self) -> Result<StoreStats> {
        Ok(StoreStats {
            words: self.count(Dataset::Words)?,
            lemmas: self.count(Dataset::Lemmas)?,
            wordroots: self.count(Dataset::WordRoots)?,
            resemble: self.count(Dataset::Resemble)?,
        })
    }

    /// The client drops with the process; there is nothing to flush
    fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}
