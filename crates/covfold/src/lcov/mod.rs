//! LCOV Report Parsing
//!
//! Reads the line-coverage subset of the LCOV tracefile format:
//!
//! ```text
//! TN:<test name>
//! SF:<source file>
//! DA:<line>,<execution count>[,<checksum>]
//! LF:<lines found>
//! LH:<lines hit>
//! end_of_record
//! ```
//!
//! Function and branch records (`FN`, `FNDA`, `BRDA`, ...) are ignored.
//! Malformed `DA:` entries are skipped rather than treated as errors.

mod parser;
mod record;

pub use parser::{parse_block, RecordParser, END_OF_RECORD};
pub use record::{
    file_name, normalize_path, parse_line_data, CountSource, CoverageRecord, LineEntry,
};
