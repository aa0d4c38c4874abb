//! Summary command handler

use super::selection::{read_report, resolve_selection, resolve_target};
use crate::commands::{SummaryArgs, SummaryFormat};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Reporter;
use covfold::{ConsoleReport, JsonReport};
use tracing::warn;

/// Execute the summary command
pub fn execute_summary(config: &CliConfig, args: &SummaryArgs) -> CliResult<()> {
    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());
    let input = config.input_path(args.filter.input.as_deref());
    let selection = resolve_selection(config, &args.filter, None)?;
    let target = resolve_target(config, args.target)?;
    if args.limit == Some(0) {
        return Err(CliError::invalid_argument("--limit must be at least 1"));
    }

    let text_output = args.format == SummaryFormat::Text;
    let Some(text) = read_report(&input)? else {
        if text_output {
            reporter.info(&format!("{} not found", input.display()));
        } else {
            warn!(path = %input.display(), "coverage report not found");
        }
        return Ok(());
    };

    if text_output && config.verbosity.is_verbose() {
        reporter.info(&format!("Reading {}", input.display()));
    }

    let result = selection.aggregate(&text);
    if text_output && result.is_empty() {
        reporter.warning("No files matched the selected filters");
    }
    let body = render_summary(&selection.title, &result, target, args)?;
    reporter.report(&body);
    Ok(())
}

/// Render the summary in the requested format
pub fn render_summary(
    title: &str,
    result: &covfold::AggregateResult,
    target: covfold::Target,
    args: &SummaryArgs,
) -> CliResult<String> {
    match args.format {
        SummaryFormat::Text => Ok(ConsoleReport::new(title)
            .with_limit(args.limit)
            .with_target(target)
            .render(result)),
        SummaryFormat::Json => {
            let mut json = JsonReport::new(title, result, target).to_json()?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::{FilterArgs, PresetArg};
    use tempfile::TempDir;

    const REPORT: &str = "\
SF:lib/features/profile/bio.dart
DA:1,1
DA:2,0
DA:3,3
end_of_record
SF:lib/features/profile/empty.dart
end_of_record
";

    fn args(input: Option<std::path::PathBuf>, format: SummaryFormat) -> SummaryArgs {
        SummaryArgs {
            filter: FilterArgs {
                input,
                preset: Some(PresetArg::Profile),
                ..FilterArgs::default()
            },
            target: None,
            limit: None,
            format,
        }
    }

    #[test]
    fn test_missing_input_is_not_an_error() {
        let config = CliConfig::new();
        let args = args(
            Some("/nonexistent/coverage/lcov.info".into()),
            SummaryFormat::Text,
        );
        assert!(execute_summary(&config, &args).is_ok());
    }

    #[test]
    fn test_execute_with_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lcov.info");
        std::fs::write(&path, REPORT).unwrap();

        let config = CliConfig::new();
        assert!(execute_summary(&config, &args(Some(path), SummaryFormat::Text)).is_ok());
    }

    #[test]
    fn test_invalid_target_fails() {
        let config = CliConfig::new();
        let mut args = args(None, SummaryFormat::Text);
        args.target = Some(101.0);
        assert!(execute_summary(&config, &args).is_err());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let config = CliConfig::new();
        let mut args = args(None, SummaryFormat::Text);
        args.limit = Some(0);
        let err = execute_summary(&config, &args).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { .. }));
    }

    #[test]
    fn test_render_text() {
        let selection = resolve_selection(
            &CliConfig::new(),
            &args(None, SummaryFormat::Text).filter,
            None,
        )
        .unwrap();
        let result = selection.aggregate(REPORT);
        let out = render_summary(
            &selection.title,
            &result,
            covfold::Target::DEFAULT,
            &args(None, SummaryFormat::Text),
        )
        .unwrap();
        assert!(out.contains("bio.dart"));
        assert!(out.contains("Coverage: 66.67%"));
        assert!(out.contains("Need 1 more lines for 95%"));
    }

    #[test]
    fn test_render_json() {
        let selection = resolve_selection(
            &CliConfig::new(),
            &args(None, SummaryFormat::Json).filter,
            None,
        )
        .unwrap();
        let result = selection.aggregate(REPORT);
        let out = render_summary(
            &selection.title,
            &result,
            covfold::Target::DEFAULT,
            &args(None, SummaryFormat::Json),
        )
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["total_hit"], 2);
        assert_eq!(parsed["total_found"], 3);
        assert_eq!(parsed["files"].as_array().unwrap().len(), 2);
    }
}
