//! JSON summary

use crate::aggregate::{round2, AggregateResult, Target, TargetGap};
use crate::result::CovfoldResult;
use serde::{Deserialize, Serialize};

/// One file entry in the JSON summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonFile {
    /// Normalized source path
    pub path: String,
    /// Hit lines
    pub hit: u64,
    /// Found lines
    pub found: u64,
    /// Coverage rounded to two decimals
    pub percent: f64,
}

/// Machine-readable coverage summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    /// Report title
    pub title: String,
    /// Total hit lines
    pub total_hit: u64,
    /// Total found lines
    pub total_found: u64,
    /// Overall coverage rounded to two decimals
    pub coverage_percent: f64,
    /// Target percentage
    pub target_percent: f64,
    /// Whether the target is reached
    pub target_met: bool,
    /// Distance to the target
    pub gap: TargetGap,
    /// Files, lowest coverage first
    pub files: Vec<JsonFile>,
}

impl JsonReport {
    /// Build the summary from an aggregate
    #[must_use]
    pub fn new(title: impl Into<String>, result: &AggregateResult, target: Target) -> Self {
        let gap = result.target_gap(target);
        Self {
            title: title.into(),
            total_hit: result.total_hit,
            total_found: result.total_found,
            coverage_percent: result.rounded_percent(),
            target_percent: target.percent(),
            target_met: gap.is_met(),
            gap,
            files: result
                .files_by_coverage()
                .into_iter()
                .map(|(path, stats)| JsonFile {
                    path: path.to_string(),
                    hit: stats.hit,
                    found: stats.found,
                    percent: round2(stats.percent()),
                })
                .collect(),
        }
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn to_json(&self) -> CovfoldResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::FileStats;
    use std::collections::BTreeMap;

    #[test]
    fn test_json_report_fields() {
        let mut per_file = BTreeMap::new();
        let _ = per_file.insert("lib/a.dart".to_string(), FileStats::new(2, 3));
        let result = AggregateResult {
            total_hit: 2,
            total_found: 3,
            per_file,
        };

        let report = JsonReport::new("Profile", &result, Target::DEFAULT);
        assert_eq!(report.coverage_percent, 66.67);
        assert_eq!(report.gap, TargetGap::Needed(1));
        assert!(!report.target_met);
        assert_eq!(report.files[0].percent, 66.67);

        let json = report.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["total_found"], 3);
        assert_eq!(parsed["gap"]["status"], "needed");
        assert_eq!(parsed["gap"]["lines"], 1);
        assert_eq!(parsed["target_met"], false);
        assert_eq!(parsed["files"][0]["path"], "lib/a.dart");
    }

    #[test]
    fn test_json_roundtrip() {
        let report = JsonReport::new("Empty", &AggregateResult::default(), Target::DEFAULT);
        let back: JsonReport = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(back, report);
    }
}
