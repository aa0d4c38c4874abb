//! Parsed LCOV records

use serde::{Deserialize, Serialize};

/// One well-formed `DA:` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineEntry {
    /// Source line number
    pub line: u32,
    /// Execution count
    pub count: u64,
}

impl LineEntry {
    /// Create a new line entry
    #[must_use]
    pub const fn new(line: u32, count: u64) -> Self {
        Self { line, count }
    }

    /// Whether the line executed at least once
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        self.count > 0
    }
}

/// Which counts a record reports as found/hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountSource {
    /// Count well-formed `DA:` entries
    #[default]
    Entries,
    /// Trust the `LF:`/`LH:` summary lines when both are present
    Summary,
}

impl CountSource {
    /// Lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Entries => "entries",
            Self::Summary => "summary",
        }
    }
}

/// Coverage data for a single `SF:` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRecord {
    /// Source path with `/` separators
    pub path: String,
    /// Source path exactly as written after `SF:`
    pub raw_path: String,
    /// Line-data entries in report order
    pub lines: Vec<LineEntry>,
    /// Value of the `LF:` line, if any
    pub declared_found: Option<u64>,
    /// Value of the `LH:` line, if any
    pub declared_hit: Option<u64>,
}

impl CoverageRecord {
    /// Create an empty record for a source path
    #[must_use]
    pub fn new(raw_path: impl Into<String>) -> Self {
        let raw_path = raw_path.into();
        Self {
            path: normalize_path(&raw_path),
            raw_path,
            lines: Vec::new(),
            declared_found: None,
            declared_hit: None,
        }
    }

    /// Number of well-formed line-data entries
    #[must_use]
    pub fn lines_found(&self) -> u64 {
        self.lines.len() as u64
    }

    /// Number of entries with a positive execution count
    #[must_use]
    pub fn lines_hit(&self) -> u64 {
        self.lines.iter().filter(|l| l.is_hit()).count() as u64
    }

    /// Found/hit counts according to `source`
    ///
    /// `Summary` falls back to the entry counts unless both `LF:` and `LH:`
    /// were present. The declared hit count is clamped to the declared
    /// found count.
    #[must_use]
    pub fn counts(&self, source: CountSource) -> (u64, u64) {
        match (source, self.declared_hit, self.declared_found) {
            (CountSource::Summary, Some(hit), Some(found)) => (hit.min(found), found),
            _ => (self.lines_hit(), self.lines_found()),
        }
    }

    /// Last path segment, used as a display name
    #[must_use]
    pub fn file_name(&self) -> &str {
        file_name(&self.path)
    }
}

/// Normalize a path to forward slashes
#[must_use]
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Last segment of a normalized path
#[must_use]
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Parse the payload of a `DA:` line
///
/// Accepts `<line>,<count>` and `<line>,<count>,<checksum>`. Returns `None`
/// for anything else; callers skip those entries.
#[must_use]
pub fn parse_line_data(payload: &str) -> Option<LineEntry> {
    let mut fields = payload.split(',');
    let line = fields.next()?.trim().parse().ok()?;
    let count = fields.next()?.trim().parse().ok()?;
    match (fields.next(), fields.next()) {
        (None, _) => Some(LineEntry::new(line, count)),
        (Some(checksum), None) if !checksum.trim().is_empty() => Some(LineEntry::new(line, count)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_data_basic() {
        assert_eq!(parse_line_data("12,3"), Some(LineEntry::new(12, 3)));
        assert_eq!(parse_line_data("7,0"), Some(LineEntry::new(7, 0)));
    }

    #[test]
    fn test_parse_line_data_with_checksum() {
        assert_eq!(
            parse_line_data("4,1,PLh8p0ZrT1Qz"),
            Some(LineEntry::new(4, 1))
        );
    }

    #[test]
    fn test_parse_line_data_rejects_wrong_arity() {
        assert_eq!(parse_line_data("12"), None);
        assert_eq!(parse_line_data("1,2,3,4"), None);
        assert_eq!(parse_line_data("1,2,"), None);
        assert_eq!(parse_line_data(""), None);
    }

    #[test]
    fn test_parse_line_data_rejects_non_numeric() {
        assert_eq!(parse_line_data("a,1"), None);
        assert_eq!(parse_line_data("1,b"), None);
        assert_eq!(parse_line_data("1,-4"), None);
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(r"C:\app\lib\features\profile\bio.dart"),
            "C:/app/lib/features/profile/bio.dart"
        );
        assert_eq!(normalize_path("lib/main.dart"), "lib/main.dart");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("lib/features/media/player.dart"), "player.dart");
        assert_eq!(file_name("main.dart"), "main.dart");
    }

    #[test]
    fn test_record_counts_from_entries() {
        let mut record = CoverageRecord::new("lib/a.dart");
        record.lines = vec![LineEntry::new(1, 1), LineEntry::new(2, 0), LineEntry::new(3, 3)];
        assert_eq!(record.lines_found(), 3);
        assert_eq!(record.lines_hit(), 2);
        assert_eq!(record.counts(CountSource::Entries), (2, 3));
    }

    #[test]
    fn test_record_counts_from_summary() {
        let mut record = CoverageRecord::new("lib/a.dart");
        record.declared_found = Some(10);
        record.declared_hit = Some(4);
        assert_eq!(record.counts(CountSource::Summary), (4, 10));
        assert_eq!(record.counts(CountSource::Entries), (0, 0));
    }

    #[test]
    fn test_record_summary_clamps_hit() {
        let mut record = CoverageRecord::new("lib/a.dart");
        record.declared_found = Some(2);
        record.declared_hit = Some(5);
        assert_eq!(record.counts(CountSource::Summary), (2, 2));
    }

    #[test]
    fn test_record_summary_falls_back_without_both_lines() {
        let mut record = CoverageRecord::new("lib/a.dart");
        record.lines = vec![LineEntry::new(1, 1)];
        record.declared_found = Some(10);
        assert_eq!(record.counts(CountSource::Summary), (1, 1));
    }

    #[test]
    fn test_record_normalizes_path() {
        let record = CoverageRecord::new(r"lib\features\media\player.dart");
        assert_eq!(record.path, "lib/features/media/player.dart");
        assert_eq!(record.raw_path, r"lib\features\media\player.dart");
        assert_eq!(record.file_name(), "player.dart");
    }
}
