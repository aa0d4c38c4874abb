//! Input loading and filter resolution shared by the report commands

use crate::commands::FilterArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use covfold::{
    aggregate, AggregateResult, CountSource, InclusionFilter, Preset, RecordParser, Target,
};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Title used when no preset or `--title` is given
pub const DEFAULT_TITLE: &str = "Total Coverage";

/// Resolved filter, count source and title for one run
#[derive(Debug)]
pub struct Selection {
    /// Compiled inclusion filter
    pub filter: InclusionFilter,
    /// Where found/hit counts come from
    pub source: CountSource,
    /// Report title
    pub title: String,
}

impl Selection {
    /// Parse and aggregate report text
    #[must_use]
    pub fn aggregate(&self, text: &str) -> AggregateResult {
        aggregate(RecordParser::new(text), &self.filter, self.source)
    }
}

/// Combine flags, config-file defaults and a command default preset
///
/// The preset comes from `--preset`, then the config file, then
/// `default_preset`. Config-file rules are applied before flag rules;
/// all of them add to the preset's rules.
pub fn resolve_selection(
    config: &CliConfig,
    args: &FilterArgs,
    default_preset: Option<Preset>,
) -> CliResult<Selection> {
    let preset = match (args.preset, config.defaults.preset.as_deref()) {
        (Some(arg), _) => Some(Preset::from(arg)),
        (None, Some(name)) => Some(Preset::from_name(name)?),
        (None, None) => default_preset,
    };
    debug!(preset = preset.map(Preset::name), "resolved preset");

    let mut builder = preset.map_or_else(InclusionFilter::builder, Preset::builder);
    let defaults = &config.defaults;
    for fragment in defaults.require.iter().chain(&args.require) {
        builder = builder.require(fragment);
    }
    for fragment in defaults.exclude.iter().chain(&args.exclude) {
        builder = builder.exclude(fragment);
    }
    for pattern in defaults.exclude_regex.iter().chain(&args.exclude_regex) {
        builder = builder.exclude_regex(pattern.as_str());
    }

    let source = args
        .counts
        .map(CountSource::from)
        .or_else(|| preset.map(Preset::count_source))
        .unwrap_or_default();
    let title = args
        .title
        .clone()
        .or_else(|| preset.map(|p| p.title().to_string()))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let filter = builder.build()?;
    debug!(
        required = ?filter.required(),
        exclusions = filter.excluded().len(),
        source = source.name(),
        "resolved filter"
    );
    Ok(Selection {
        filter,
        source,
        title,
    })
}

/// Coverage target: flag, then config file, then 95%
pub fn resolve_target(config: &CliConfig, explicit: Option<f64>) -> CliResult<Target> {
    match explicit.or(config.defaults.target) {
        Some(value) => Ok(Target::from_percent(value)?),
        None => Ok(Target::DEFAULT),
    }
}

/// Read the LCOV file; `Ok(None)` when it does not exist
pub fn read_report(path: &Path) -> CliResult<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            debug!(path = %path.display(), bytes = text.len(), "read coverage report");
            Ok(Some(text))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
