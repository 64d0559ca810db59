//! Tabular word file loader
//!
//! The word file is a CSV with a header row whose column names match the
//! `WordEntry` field names exactly. Rows are loaded as-is; the only
//! coercion is empty field → `None`.

use crate::record::WordEntry;
use crate::Result;
use std::io::Read;

/// Read every row of the tabular word file.
///
/// The whole file is materialized before insertion so a read failure never
/// leaves a half-loaded source behind.
pub fn read_words<R: Read>(reader: R) -> Result<Vec<WordEntry>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();
    for row in csv_reader.deserialize() {
        let entry: WordEntry = row?;
        entries.push(entry);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "word,phonetic,definition,translation,pos,collins,oxford,tag,bnc,frq,exchange,detail,audio";

    #[test]
    fn test_rows_load_as_is() {
        let csv = format!(
            "{HEADER}\nhello,h@'l@u,n. greeting,n. 问候,n,3,1,zk gk,254,190,s:hellos,,hello.mp3\n"
        );
        let entries = read_words(csv.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.word, "hello");
        assert_eq!(entry.phonetic.as_deref(), Some("h@'l@u"));
        assert_eq!(entry.collins, Some(3));
        assert_eq!(entry.oxford, Some(1));
        assert_eq!(entry.bnc, Some(254));
        assert_eq!(entry.frq, Some(190));
        assert_eq!(entry.detail, None);
        assert_eq!(entry.audio.as_deref(), Some("hello.mp3"));
    }

    #[test]
    fn test_empty_fields_become_none() {
        let csv = format!("{HEADER}\nbare,,,,,,,,,,,,\n");
        let entries = read_words(csv.as_bytes()).unwrap();
        let entry = &entries[0];
        assert_eq!(entry.word, "bare");
        assert_eq!(entry.phonetic, None);
        assert_eq!(entry.collins, None);
        assert_eq!(entry.frq, None);
    }

    #[test]
    fn test_quoted_fields_with_commas() {
        let csv = format!(
            "{HEADER}\nrun,rVn,\"v. move fast, jog\",跑,v,5,1,zk,120,100,\"p:ran/d:run\",,\n"
        );
        let entries = read_words(csv.as_bytes()).unwrap();
        assert_eq!(entries[0].definition.as_deref(), Some("v. move fast, jog"));
    }

    #[test]
    fn test_non_numeric_rank_is_an_error() {
        let csv = format!("{HEADER}\nbad,,,,,not-a-number,,,,,,,\n");
        assert!(read_words(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_header_only_yields_no_entries() {
        let entries = read_words(format!("{HEADER}\n").as_bytes()).unwrap();
        assert!(entries.is_empty());
    }
}
