//! Coverage aggregation
//!
//! Folds parsed records into per-file and overall hit/found totals.

use crate::filter::InclusionFilter;
use crate::lcov::{CountSource, CoverageRecord};
use crate::result::{CovfoldError, CovfoldResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, trace};

/// Percentage of `hit` over `found`, 0 when nothing was found
#[must_use]
pub fn percent(hit: u64, found: u64) -> f64 {
    if found == 0 {
        return 0.0;
    }
    (hit as f64 / found as f64) * 100.0
}

/// Round a percentage to two decimal places for display
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Hit/found counts for one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileStats {
    /// Lines with a positive execution count
    pub hit: u64,
    /// Instrumented lines
    pub found: u64,
}

impl FileStats {
    /// Create new stats
    #[must_use]
    pub const fn new(hit: u64, found: u64) -> Self {
        Self { hit, found }
    }

    /// Coverage percentage, 0 for files without instrumented lines
    #[must_use]
    pub fn percent(&self) -> f64 {
        percent(self.hit, self.found)
    }
}

/// Coverage goal stored in basis points (95% = 9500)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Target {
    basis_points: u32,
}

impl Target {
    /// The 95% goal used by every report
    pub const DEFAULT: Self = Self { basis_points: 9500 };

    /// Build a target from a percentage in `[0, 100]`
    ///
    /// # Errors
    ///
    /// Returns [`CovfoldError::InvalidTarget`] for values outside the range
    /// or non-finite values.
    pub fn from_percent(value: f64) -> CovfoldResult<Self> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(CovfoldError::InvalidTarget { value });
        }
        Ok(Self {
            basis_points: (value * 100.0).round() as u32,
        })
    }

    /// Target as a percentage
    #[must_use]
    pub fn percent(&self) -> f64 {
        f64::from(self.basis_points) / 100.0
    }

    /// `ceil(found * T)` computed exactly
    #[must_use]
    pub fn required_lines(&self, found: u64) -> u64 {
        let scaled = u128::from(found) * u128::from(self.basis_points);
        scaled.div_ceil(10_000) as u64
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Distance between the current coverage and a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "lines", rename_all = "lowercase")]
pub enum TargetGap {
    /// More lines must be hit to reach the target
    Needed(u64),
    /// The target is met with this many lines to spare
    Surplus(u64),
}

impl TargetGap {
    /// Whether the target is met
    #[must_use]
    pub const fn is_met(&self) -> bool {
        matches!(self, Self::Surplus(_))
    }
}

/// Immutable outcome of one aggregation pass
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Sum of hit lines over included records
    pub total_hit: u64,
    /// Sum of found lines over included records
    pub total_found: u64,
    /// Last-seen stats per included path
    pub per_file: BTreeMap<String, FileStats>,
}

impl AggregateResult {
    /// Overall coverage percentage, 0 when nothing was found
    #[must_use]
    pub fn coverage_percent(&self) -> f64 {
        percent(self.total_hit, self.total_found)
    }

    /// Overall coverage rounded to two decimals
    #[must_use]
    pub fn rounded_percent(&self) -> f64 {
        round2(self.coverage_percent())
    }

    /// Lines needed for (or lines over) a target
    #[must_use]
    pub fn target_gap(&self, target: Target) -> TargetGap {
        let required = target.required_lines(self.total_found);
        if self.total_hit < required {
            TargetGap::Needed(required - self.total_hit)
        } else {
            TargetGap::Surplus(self.total_hit - required)
        }
    }

    /// Per-file stats sorted by ascending coverage, ties by path
    #[must_use]
    pub fn files_by_coverage(&self) -> Vec<(&str, FileStats)> {
        let mut files: Vec<(&str, FileStats)> = self
            .per_file
            .iter()
            .map(|(path, stats)| (path.as_str(), *stats))
            .collect();
        files.sort_by(|a, b| a.1.percent().total_cmp(&b.1.percent()).then(a.0.cmp(b.0)));
        files
    }

    /// Whether no record was included
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.per_file.is_empty()
    }
}

/// Running fold state
#[derive(Debug, Default)]
pub struct Aggregator {
    source: CountSource,
    result: AggregateResult,
    seen: usize,
}

impl Aggregator {
    /// Create an aggregator reading counts from `source`
    #[must_use]
    pub fn new(source: CountSource) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    /// Fold one record; excluded records only bump the seen counter
    pub fn fold(&mut self, record: &CoverageRecord, included: bool) {
        self.seen += 1;
        if !included {
            trace!(path = %record.path, "excluded");
            return;
        }
        let (hit, found) = record.counts(self.source);
        // Declared LF/LH counts are unbounded
        self.result.total_hit = self.result.total_hit.saturating_add(hit);
        self.result.total_found = self.result.total_found.saturating_add(found);
        let _ = self
            .result
            .per_file
            .insert(record.path.clone(), FileStats::new(hit, found));
    }

    /// Number of records seen so far, included or not
    #[must_use]
    pub const fn seen(&self) -> usize {
        self.seen
    }

    /// Freeze the fold into a result
    #[must_use]
    pub fn finish(self) -> AggregateResult {
        info!(
            records = self.seen,
            included = self.result.per_file.len(),
            hit = self.result.total_hit,
            found = self.result.total_found,
            "aggregation finished"
        );
        self.result
    }
}

/// Filter and fold a record stream in one pass
pub fn aggregate<I>(records: I, filter: &InclusionFilter, source: CountSource) -> AggregateResult
where
    I: IntoIterator<Item = CoverageRecord>,
{
    let mut aggregator = Aggregator::new(source);
    for record in records {
        let included = filter.include(&record.path);
        aggregator.fold(&record, included);
    }
    aggregator.finish()
}
