//! Resemble file parser
//!
//! The resemble file is a sequence of word-group blocks separated by `%`.
//! The first line of a block names the group; the remaining lines describe
//! it:
//!
//! ```text
//! able, capable, competent
//! able: 通常的用词
//! capable: 侧重多方面的才能
//! %
//! ...
//! ```

use crate::record::ResembleGroup;

/// Block delimiter
const DELIMITER: char = '%';

/// Split the full file content into resemble groups.
///
/// Segments that are empty after trimming contribute no record. A
/// single-line segment yields an empty description.
pub fn parse_resemble(content: &str) -> Vec<ResembleGroup> {
    content
        .split(DELIMITER)
        .filter_map(parse_segment)
        .collect()
}

fn parse_segment(segment: &str) -> Option<ResembleGroup> {
    let segment = segment.trim();
    if segment.is_empty() {
        return None;
    }

    let mut lines = segment.lines();
    let group_name = lines.next()?.trim().to_string();
    let description = lines.collect::<Vec<_>>().join("\n").trim().to_string();

    Some(ResembleGroup { group_name, description })
}
