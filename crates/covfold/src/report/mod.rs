//! Coverage Report Renderers
//!
//! Console table, HTML page and JSON summary over an [`AggregateResult`].
//!
//! [`AggregateResult`]: crate::aggregate::AggregateResult

mod console;
mod html;
mod json;

pub use console::ConsoleReport;
pub use html::{escape_html, short_path, CoverageClass, HtmlReport, HtmlRow, DEFAULT_HTML_PATH};
pub use json::{JsonFile, JsonReport};
