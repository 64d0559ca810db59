//! Word-root file parser
//!
//! The word-root file is one JSON object mapping a root string to its
//! metadata:
//!
//! ```text
//! { "bio": { "meaning": "life", "class": "noun-forming",
//!            "example": ["biology", "biography"], "origin": "Greek" } }
//! ```
//!
//! Parsing is strict: a missing required field on any entry fails the whole
//! file. The caller gets either every record or none, so a partially
//! malformed file never produces a partial insert.

use crate::record::WordRoot;
use crate::{Error, Result};
use serde_json::Value;
use std::io::Read;

/// Parse the whole word-root file into records.
///
/// `example` entries are joined with `", "` into the `examples` field.
pub fn parse_wordroots<R: Read>(reader: R) -> Result<Vec<WordRoot>> {
    let value: Value = serde_json::from_reader(reader)?;
    let entries = value
        .as_object()
        .ok_or_else(|| Error::Parse("word-root file: expected a top-level JSON object".to_string()))?;

    let mut roots = Vec::with_capacity(entries.len());
    for (root, details) in entries {
        roots.push(WordRoot {
            root: root.clone(),
            meaning: required_str(details, root, "meaning")?,
            word_class: required_str(details, root, "class")?,
            examples: example_list(details, root)?.join(", "),
            origin: required_str(details, root, "origin")?,
        });
    }
    Ok(roots)
}

fn required_str(details: &Value, root: &str, field: &str) -> Result<String> {
    details
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            Error::Parse(format!("word-root entry '{}': missing or non-string field '{}'", root, field))
        })
}

fn example_list(details: &Value, root: &str) -> Result<Vec<String>> {
    let items = details
        .get("example")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            Error::Parse(format!("word-root entry '{}': missing or non-array field 'example'", root))
        })?;

    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                Error::Parse(format!("word-root entry '{}': non-string example entry", root))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIO: &str = r#"{"bio": {"meaning": "life", "class": "noun-forming",
        "example": ["biology", "biography"], "origin": "Greek"}}"#;

    #[test]
    fn test_examples_joined() {
        let roots = parse_wordroots(BIO.as_bytes()).unwrap();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].root, "bio");
        assert_eq!(roots[0].meaning, "life");
        assert_eq!(roots[0].word_class, "noun-forming");
        assert_eq!(roots[0].examples, "biology, biography");
        assert_eq!(roots[0].origin, "Greek");
    }

    #[test]
    fn test_missing_field_fails_whole_file() {
        let input = r#"{
            "bio": {"meaning": "life", "class": "noun-forming",
                    "example": ["biology"], "origin": "Greek"},
            "geo": {"meaning": "earth", "class": "noun-forming",
                    "example": ["geology"]}
        }"#;
        let err = parse_wordroots(input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().contains("origin"));
    }

    #[test]
    fn test_top_level_must_be_object() {
        let err = parse_wordroots(r#"["bio"]"#.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = parse_wordroots(r#"{"bio": "#.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_example_must_be_an_array_of_strings() {
        let input = r#"{"bio": {"meaning": "life", "class": "n",
            "example": "biology", "origin": "Greek"}}"#;
        assert!(parse_wordroots(input.as_bytes()).is_err());

        let input = r#"{"bio": {"meaning": "life", "class": "n",
            "example": [1, 2], "origin": "Greek"}}"#;
        assert!(parse_wordroots(input.as_bytes()).is_err());
    }

    #[test]
    fn test_empty_object_yields_no_records() {
        assert!(parse_wordroots("{}".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_empty_example_list_joins_to_empty_string() {
        let input = r#"{"bio": {"meaning": "life", "class": "n",
            "example": [], "origin": "Greek"}}"#;
        let roots = parse_wordroots(input.as_bytes()).unwrap();
        assert_eq!(roots[0].examples, "");
    }
}
