//! Command handlers - extracted from main.rs for testability
//!
//! Each handler module contains:
//! - The execution logic for a CLI command
//! - Pure helper functions
//! - Tests

pub mod html;
pub mod presets;
pub mod selection;
pub mod summary;

pub use html::{execute_html, open_in_browser};
pub use presets::{execute_presets, render_presets};
pub use selection::{read_report, resolve_selection, resolve_target, Selection};
pub use summary::{execute_summary, render_summary};
