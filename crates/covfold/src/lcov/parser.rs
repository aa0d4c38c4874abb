//! Lazy LCOV record parser

use super::record::{parse_line_data, CoverageRecord};
use tracing::{debug, trace};

/// Literal that terminates every LCOV block
pub const END_OF_RECORD: &str = "end_of_record";

/// Iterator over the `SF:` blocks of an LCOV report
///
/// Cloning the parser (or building a new one over the same text) replays
/// the same sequence of records.
#[derive(Debug, Clone)]
pub struct RecordParser<'a> {
    blocks: std::str::Split<'a, &'static str>,
}

impl<'a> RecordParser<'a> {
    /// Create a parser over the full report text
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            blocks: text.split(END_OF_RECORD),
        }
    }
}

impl Iterator for RecordParser<'_> {
    type Item = CoverageRecord;

    fn next(&mut self) -> Option<Self::Item> {
        for block in self.blocks.by_ref() {
            if let Some(record) = parse_block(block) {
                return Some(record);
            }
        }
        None
    }
}

/// Parse one block; `None` when it has no `SF:` line
#[must_use]
pub fn parse_block(block: &str) -> Option<CoverageRecord> {
    let mut record: Option<CoverageRecord> = None;
    let mut pending = Vec::new();
    let mut declared_found = None;
    let mut declared_hit = None;

    for line in block.lines().map(str::trim) {
        if let Some(path) = line.strip_prefix("SF:") {
            if record.is_none() {
                record = Some(CoverageRecord::new(path.trim()));
            } else {
                debug!(path = path.trim(), "ignoring extra SF line in block");
            }
        } else if let Some(payload) = line.strip_prefix("DA:") {
            match parse_line_data(payload) {
                Some(entry) => pending.push(entry),
                None => trace!(line, "skipping malformed line data"),
            }
        } else if let Some(value) = line.strip_prefix("LF:") {
            declared_found = value.trim().parse().ok();
        } else if let Some(value) = line.strip_prefix("LH:") {
            declared_hit = value.trim().parse().ok();
        }
    }

    match record {
        Some(mut record) => {
            record.lines = pending;
            record.declared_found = declared_found;
            record.declared_hit = declared_hit;
            Some(record)
        }
        None => {
            if !block.trim().is_empty() {
                debug!("skipping block without SF line");
            }
            None
        }
    }
}
