//! Source-file parsers
//!
//! One parser per input format:
//! - `words`: tabular word entries (CSV with header row)
//! - `lemma`: `LEMMA -> FORM1, FORM2, ...` lines
//! - `wordroot`: JSON object keyed by root string
//! - `resemble`: `%`-delimited word-group blocks
//!
//! Parsers know nothing about storage; the loader feeds their output to a
//! `Store`.

pub mod lemma;
pub mod resemble;
pub mod wordroot;
pub mod words;

pub use lemma::LemmaParser;
pub use resemble::parse_resemble;
pub use wordroot::parse_wordroots;
pub use words::read_words;
