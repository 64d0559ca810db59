//! SQLite storage implementation

use std::path::Path;
use rusqlite::{params, Connection};

use super::schema;
use super::{Store, StoreStats};
use crate::record::{Lemma, ResembleGroup, WordEntry, WordRoot};
use crate::{Error, Result};

/// SQLite-backed storage for the dictionary datasets.
///
/// All inserts use `INSERT OR IGNORE`: the first record for a given primary
/// key wins and re-running a load leaves row counts unchanged.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| {
            Error::Connection(format!("cannot open database {}: {}", path.display(), e))
        })?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::Connection(format!("cannot open in-memory database: {}", e)))?;
        Ok(Self { conn })
    }

    fn count(&self, table: &str) -> Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl Store for SqliteStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    /// Create the four tables if absent
    fn ensure_schema(&mut self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    fn insert_words(&mut self, entries: &[WordEntry]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(
                r#"
                INSERT OR IGNORE INTO words
                    (word, phonetic, definition, translation, pos, collins, oxford, tag, bnc, frq, exchange, detail, audio)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
                "#,
            )?;
            for entry in entries {
                inserted += stmt.execute(params![
                    entry.word,
                    entry.phonetic,
                    entry.definition,
                    entry.translation,
                    entry.pos,
                    entry.collins,
                    entry.oxford,
                    entry.tag,
                    entry.bnc,
                    entry.frq,
                    entry.exchange,
                    entry.detail,
                    entry.audio,
                ])?;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }

    fn insert_lemmas(&mut self, lemmas: &[Lemma]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        {
            let mut stmt =
                tx.prepare("INSERT OR IGNORE INTO lemmas (lemma, forms) VALUES (?1, ?2)")?;
            for lemma in lemmas {
                inserted += stmt.execute(params![lemma.lemma, lemma.forms_joined()])?;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }

    fn insert_wordroots(&mut self, roots: &[WordRoot]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(
                r#"
                INSERT OR IGNORE INTO wordroots (root, meaning, class, examples, origin)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )?;
            for root in roots {
                inserted += stmt.execute(params![
                    root.root,
                    root.meaning,
                    root.word_class,
                    root.examples,
                    root.origin,
                ])?;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }

    fn insert_resemble(&mut self, groups: &[ResembleGroup]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        {
            let mut stmt = tx
                .prepare("INSERT OR IGNORE INTO resemble (group_name, description) VALUES (?1, ?2)")?;
            for group in groups {
                inserted += stmt.execute(params![group.group_name, group.description])?;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }

    fn stats(&mut self) -> Result<StoreStats> {
        Ok(StoreStats {
            words: self.count("words")?,
            lemmas: self.count("lemmas")?,
            wordroots: self.count("wordroots")?,
            resemble: self.count("resemble")?,
        })
    }

    fn close(self: Box<Self>) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }
}
