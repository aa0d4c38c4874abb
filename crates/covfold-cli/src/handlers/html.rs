//! HTML command handler

use super::selection::{read_report, resolve_selection};
use crate::commands::HtmlArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Reporter;
use covfold::{HtmlReport, Preset};
use std::path::Path;
use tracing::info;

/// Execute the html command
pub fn execute_html(config: &CliConfig, args: &HtmlArgs) -> CliResult<()> {
    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());
    let input = config.input_path(args.filter.input.as_deref());
    let selection = resolve_selection(config, &args.filter, Some(Preset::Features))?;

    let Some(text) = read_report(&input)? else {
        reporter.info(&format!("{} not found", input.display()));
        return Ok(());
    };

    let result = selection.aggregate(&text);
    if result.is_empty() {
        reporter.warning("No files matched the selected filters");
    }
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    let report = HtmlReport::new(&selection.title).with_generated_at(timestamp.to_string());
    report
        .save(&result, &args.output)
        .map_err(|e| CliError::html_write(&args.output, e))?;
    info!(path = %args.output.display(), "wrote html report");

    let files = HtmlReport::rows(&result).len();
    reporter.success("HTML coverage report generated!");
    reporter.report(&format!(
        "Overall Coverage: {:.1}%\nFiles Analyzed: {files}\nReport: {}\n",
        result.coverage_percent(),
        args.output.display()
    ));

    if args.open {
        open_in_browser(&args.output);
    }
    Ok(())
}

/// Open a file in the system's default browser
pub fn open_in_browser(path: &Path) {
    #[cfg(target_os = "macos")]
    let _ = std::process::Command::new("open").arg(path).spawn();
    #[cfg(target_os = "linux")]
    let _ = std::process::Command::new("xdg-open").arg(path).spawn();
    #[cfg(target_os = "windows")]
    let _ = std::process::Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .spawn();
}
