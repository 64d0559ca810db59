//! Load orchestration
//!
//! One run opens one store, ensures the schema, then loads the four sources
//! in fixed order: words, lemmas, wordroots, resemble. Connection and schema
//! failures abort the run; any other failure is confined to its source, and
//! the remaining sources are still attempted.

use std::fs::File;
use std::io::BufReader;

use crate::config::LoadConfig;
use crate::parser;
use crate::record::Dataset;
use crate::storage::{open_store, StoreStats};
use crate::Result;

/// Outcome of one source file: records inserted, or why it failed
#[derive(Debug)]
pub struct SourceReport {
    pub dataset: Dataset,
    pub result: Result<usize>,
}

impl SourceReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn inserted(&self) -> usize {
        *self.result.as_ref().unwrap_or(&0)
    }
}

/// Outcome of a full load run
#[derive(Debug)]
pub struct LoadReport {
    /// One report per source, in load order
    pub sources: Vec<SourceReport>,
    /// Store counts after the run
    pub stats: StoreStats,
}

impl LoadReport {
    pub fn all_ok(&self) -> bool {
        self.sources.iter().all(SourceReport::is_ok)
    }

    pub fn failed_count(&self) -> usize {
        self.sources.iter().filter(|s| !s.is_ok()).count()
    }

    pub fn total_inserted(&self) -> usize {
        self.sources.iter().map(SourceReport::inserted).sum()
    }
}

/// Run a full load against the configured store.
///
/// Fatal errors (connection, schema creation, final stats read) surface as
/// `Err`; per-source failures are recorded in the returned report.
pub fn run(config: &LoadConfig) -> Result<LoadReport> {
    let mut store = open_store(&config.store)?;
    store.ensure_schema()?;
    tracing::info!(backend = store.backend_name(), "store ready");

    let mut sources = Vec::with_capacity(Dataset::all().len());

    sources.push(load_source(Dataset::Words, || {
        let file = File::open(&config.inputs.words)?;
        let entries = parser::read_words(file)?;
        store.insert_words(&entries)
    }));

    sources.push(load_source(Dataset::Lemmas, || {
        let file = File::open(&config.inputs.lemmas)?;
        let lemmas = parser::LemmaParser::new(BufReader::new(file)).collect::<Result<Vec<_>>>()?;
        store.insert_lemmas(&lemmas)
    }));

    sources.push(load_source(Dataset::WordRoots, || {
        let file = File::open(&config.inputs.wordroots)?;
        let roots = parser::parse_wordroots(BufReader::new(file))?;
        store.insert_wordroots(&roots)
    }));

    sources.push(load_source(Dataset::Resemble, || {
        let content = std::fs::read_to_string(&config.inputs.resemble)?;
        let groups = parser::parse_resemble(&content);
        store.insert_resemble(&groups)
    }));

    let stats = store.stats()?;
    store.close()?;

    Ok(LoadReport { sources, stats })
}

fn load_source(dataset: Dataset, load: impl FnOnce() -> Result<usize>) -> SourceReport {
    let result = load();
    match &result {
        Ok(inserted) => {
            tracing::info!(dataset = dataset.as_str(), inserted = *inserted, "source loaded")
        }
        Err(e) => tracing::error!(dataset = dataset.as_str(), error = %e, "source failed"),
    }
    SourceReport { dataset, result }
}
