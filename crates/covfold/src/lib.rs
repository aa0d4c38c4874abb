//! covfold: LCOV coverage aggregation by feature folder
//!
//! Parses LCOV line-coverage reports, keeps the files that belong to a
//! feature area of an application, and sums their hit/found counts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  lcov.info → RecordParser → InclusionFilter → Aggregator        │
//! │                                                  ↓              │
//! │                              ConsoleReport / HtmlReport / JSON  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use covfold::{aggregate, CountSource, InclusionFilter, RecordParser, Target, TargetGap};
//!
//! let text = "SF:lib/features/profile/bio.dart\nDA:1,1\nDA:2,0\nDA:3,3\nend_of_record\n";
//! let filter = InclusionFilter::builder()
//!     .require("features/profile")
//!     .build()
//!     .unwrap();
//!
//! let result = aggregate(RecordParser::new(text), &filter, CountSource::Entries);
//! assert_eq!((result.total_hit, result.total_found), (2, 3));
//! assert_eq!(result.rounded_percent(), 66.67);
//! assert_eq!(result.target_gap(Target::DEFAULT), TargetGap::Needed(1));
//! ```

#![warn(missing_docs)]

pub mod aggregate;
pub mod filter;
pub mod lcov;
pub mod preset;
pub mod report;
mod result;

pub use aggregate::{aggregate, AggregateResult, Aggregator, FileStats, Target, TargetGap};
pub use filter::{Exclusion, InclusionFilter, InclusionFilterBuilder};
pub use lcov::{CountSource, CoverageRecord, LineEntry, RecordParser};
pub use preset::{FeatureFolder, Preset};
pub use report::{ConsoleReport, HtmlReport, JsonReport};
pub use result::{CovfoldError, CovfoldResult};
