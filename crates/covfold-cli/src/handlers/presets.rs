//! Presets command handler

use crate::config::CliConfig;
use crate::output::Reporter;
use covfold::Preset;
use std::fmt::Write;

/// Execute the presets command
pub fn execute_presets(config: &CliConfig) {
    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());
    reporter.report(&render_presets());
}

/// One line per preset: name, count source and description
#[must_use]
pub fn render_presets() -> String {
    let mut out = String::new();
    for preset in Preset::ALL {
        let _ = writeln!(
            out,
            "{:12} {:8} {}",
            preset.name(),
            preset.count_source().name(),
            preset.description()
        );
    }
    out
}
