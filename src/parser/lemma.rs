//! Lemma file parser
//!
//! The lemma file maps a base form to its inflections, one mapping per line:
//!
//! ```text
//! abandon -> abandons, abandoning, abandoned
//! ```
//!
//! Only lines containing the exact separator `" -> "` produce a record;
//! everything else (comments, blank lines, malformed entries) is skipped
//! silently.

use crate::record::Lemma;
use crate::Result;
use std::io::BufRead;

/// Separator between the lemma and its forms
const SEPARATOR: &str = " -> ";

/// Separator between individual forms
const FORM_SEPARATOR: &str = ", ";

/// Lazy iterator over lemma records in a text stream.
///
/// Single-pass: consumes the underlying reader line by line. I/O errors
/// surface as `Err` items.
pub struct LemmaParser<R: BufRead> {
    lines: std::io::Lines<R>,
}

impl<R: BufRead> LemmaParser<R> {
    pub fn new(reader: R) -> Self {
        Self { lines: reader.lines() }
    }
}

impl<R: BufRead> Iterator for LemmaParser<R> {
    type Item = Result<Lemma>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Err(e) => return Some(Err(e.into())),
                Ok(line) => {
                    if let Some(lemma) = parse_line(&line) {
                        return Some(Ok(lemma));
                    }
                }
            }
        }
    }
}

/// Parse a single line into a lemma record.
///
/// Returns `None` for lines without the `" -> "` separator. The forms
/// sequence is never empty on a match: splitting a (possibly empty) blob
/// on `", "` yields at least one token.
pub fn parse_line(line: &str) -> Option<Lemma> {
    let line = line.trim();
    let (lemma, forms) = line.split_once(SEPARATOR)?;
    Some(Lemma {
        lemma: lemma.to_string(),
        forms: forms.split(FORM_SEPARATOR).map(str::to_string).collect(),
    })
}
