//! Record types - the four dictionary datasets
//!
//! Each source file flattens into one record type:
//! - `WordEntry`: one row of the tabular word file
//! - `Lemma`: one `LEMMA -> FORM1, FORM2, ...` line
//! - `WordRoot`: one key of the word-root JSON object
//! - `ResembleGroup`: one `%`-delimited block of the resemble file
//!
//! Records are write-once: parsed from a static input file, inserted once,
//! never mutated.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The four datasets a load run touches, in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Words,
    Lemmas,
    WordRoots,
    Resemble,
}

impl Dataset {
    /// Table/collection name for this dataset
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Words => "words",
            Dataset::Lemmas => "lemmas",
            Dataset::WordRoots => "wordroots",
            Dataset::Resemble => "resemble",
        }
    }

    /// All datasets in load order
    pub fn all() -> &'static [Dataset] {
        &[
            Dataset::Words,
            Dataset::Lemmas,
            Dataset::WordRoots,
            Dataset::Resemble,
        ]
    }
}

impl FromStr for Dataset {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "words" => Ok(Dataset::Words),
            "lemmas" => Ok(Dataset::Lemmas),
            "wordroots" => Ok(Dataset::WordRoots),
            "resemble" => Ok(Dataset::Resemble),
            _ => Err(crate::Error::Parse(format!("Unknown dataset: {}", s))),
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the tabular word file.
///
/// Field names match the CSV header exactly; the loader performs no
/// transformation. Empty CSV fields deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Headword, unique key
    pub word: String,
    pub phonetic: Option<String>,
    pub definition: Option<String>,
    pub translation: Option<String>,
    /// Part-of-speech tags
    pub pos: Option<String>,
    /// Collins star rating
    pub collins: Option<i64>,
    /// Oxford 3000 flag
    pub oxford: Option<i64>,
    pub tag: Option<String>,
    /// British National Corpus frequency rank
    pub bnc: Option<i64>,
    /// Contemporary corpus frequency rank
    pub frq: Option<i64>,
    /// Inflection/exchange forms, encoded as in the source file
    pub exchange: Option<String>,
    pub detail: Option<String>,
    pub audio: Option<String>,
}

/// A lemma with its inflected forms.
///
/// `forms` is non-empty whenever the source line matched the
/// `LEMMA -> FORMS` pattern; order follows the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lemma {
    pub lemma: String,
    pub forms: Vec<String>,
}

impl Lemma {
    /// Forms joined back into the source-file encoding, used by the
    /// relational backend
    pub fn forms_joined(&self) -> String {
        self.forms.join(", ")
    }
}

/// A morphological root with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRoot {
    pub root: String,
    pub meaning: String,
    #[serde(rename = "class")]
    pub word_class: String,
    /// Example words, joined with `", "` at parse time
    pub examples: String,
    pub origin: String,
}

/// A curated cluster of similar words with a shared description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResembleGroup {
    /// First non-empty line of the `%`-delimited block
    pub group_name: String,
    /// Remaining lines, newline-joined and trimmed; empty for
    /// single-line blocks
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_roundtrip() {
        for dataset in Dataset::all() {
            let s = dataset.as_str();
            let parsed: Dataset = s.parse().unwrap();
            assert_eq!(*dataset, parsed);
        }
    }

    #[test]
    fn test_dataset_order() {
        let names: Vec<&str> = Dataset::all().iter().map(|d| d.as_str()).collect();
        assert_eq!(names, ["words", "lemmas", "wordroots", "resemble"]);
    }

    #[test]
    fn test_lemma_forms_joined() {
        let lemma = Lemma {
            lemma: "abandon".to_string(),
            forms: vec!["abandons".to_string(), "abandoning".to_string()],
        };
        assert_eq!(lemma.forms_joined(), "abandons, abandoning");
    }

    #[test]
    fn test_wordroot_class_field_serializes_as_class() {
        let root = WordRoot {
            root: "bio".to_string(),
            meaning: "life".to_string(),
            word_class: "noun-forming".to_string(),
            examples: "biology, biography".to_string(),
            origin: "Greek".to_string(),
        };
        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json["class"], "noun-forming");
        assert!(json.get("word_class").is_none());
    }
}
