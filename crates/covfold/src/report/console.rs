//! Fixed-width console table

use crate::aggregate::{round2, AggregateResult, Target, TargetGap};
use crate::lcov::file_name;
use std::fmt::Write;

const RULE_WIDTH: usize = 80;

/// Plain-text coverage summary
#[derive(Debug, Clone)]
pub struct ConsoleReport {
    title: String,
    limit: Option<usize>,
    target: Target,
}

impl ConsoleReport {
    /// Create a report with the given summary title
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            limit: None,
            target: Target::DEFAULT,
        }
    }

    /// Show at most `limit` files (the lowest covered ones)
    #[must_use]
    pub const fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Set the coverage target
    #[must_use]
    pub const fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Render the table, summary block and target message
    #[must_use]
    pub fn render(&self, result: &AggregateResult) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Files by coverage (lowest first):");
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
        let rows = result
            .files_by_coverage()
            .into_iter()
            .filter(|(_, stats)| stats.found > 0)
            .take(self.limit.unwrap_or(usize::MAX));
        for (path, stats) in rows {
            let _ = writeln!(
                out,
                "{:40} {:4}/{:4} = {:6.2}%",
                file_name(path),
                stats.hit,
                stats.found,
                round2(stats.percent())
            );
        }

        if result.total_found == 0 {
            let _ = writeln!(out, "\nNo lines found for {}", self.title);
            return out;
        }

        let _ = writeln!(out, "\n{}", "=".repeat(RULE_WIDTH));
        let _ = writeln!(out, "{}:", self.title);
        let _ = writeln!(out, "Lines Hit: {}", result.total_hit);
        let _ = writeln!(out, "Lines Found: {}", result.total_found);
        let _ = writeln!(out, "Coverage: {:.2}%", result.rounded_percent());
        let _ = writeln!(out, "{}", self.target_message(result));
        out
    }

    /// Distance-to-target sentence
    #[must_use]
    pub fn target_message(&self, result: &AggregateResult) -> String {
        let target = self.target.percent();
        match result.target_gap(self.target) {
            TargetGap::Needed(n) => format!("Need {n} more lines for {target}%"),
            TargetGap::Surplus(n) => {
                format!("Coverage target achieved! ({n} lines over {target}%)")
            }
        }
    }
}
