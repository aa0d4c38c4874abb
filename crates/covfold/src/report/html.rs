//! Self-contained HTML coverage report

use crate::aggregate::AggregateResult;
use crate::preset::FeatureFolder;
use crate::result::CovfoldResult;
use std::fmt::Write;
use std::path::Path;

/// Default output location, relative to the project root
pub const DEFAULT_HTML_PATH: &str = "coverage/html/index.html";

/// Coverage band used for colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageClass {
    /// 80% and above
    High,
    /// 50% up to 80%
    Medium,
    /// Below 50%
    Low,
}

impl CoverageClass {
    /// Band for a percentage
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 80.0 {
            Self::High
        } else if percent >= 50.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// CSS class name
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// One table row
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlRow {
    /// Feature folder the file belongs to
    pub feature: FeatureFolder,
    /// Path relative to `lib/`
    pub short_path: String,
    /// Coverage percentage
    pub percent: f64,
    /// Hit lines
    pub hit: u64,
    /// Found lines
    pub found: u64,
}

impl HtmlRow {
    /// Coverage band
    #[must_use]
    pub fn class(&self) -> CoverageClass {
        CoverageClass::from_percent(self.percent)
    }

    /// Bar width in percent, clamped to `[0, 100]`
    #[must_use]
    pub fn bar_width(&self) -> f64 {
        self.percent.clamp(0.0, 100.0)
    }
}

/// Path shown in the report: the part after the first `/lib/`
///
/// Paths without a `/lib/` segment, including relative `lib/...` paths,
/// are shown unchanged.
#[must_use]
pub fn short_path(path: &str) -> &str {
    path.split_once("/lib/").map_or(path, |(_, rest)| rest)
}

/// Escape HTML special characters
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// HTML report generator
#[derive(Debug, Clone)]
pub struct HtmlReport {
    title: String,
    generated_at: Option<String>,
}

impl Default for HtmlReport {
    fn default() -> Self {
        Self::new("Coverage Report")
    }
}

impl HtmlReport {
    /// Create a report with a page title
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            generated_at: None,
        }
    }

    /// Add a "generated at" footer
    #[must_use]
    pub fn with_generated_at(mut self, timestamp: impl Into<String>) -> Self {
        self.generated_at = Some(timestamp.into());
        self
    }

    /// Rows for files with instrumented lines in a known feature folder,
    /// lowest coverage first
    #[must_use]
    pub fn rows(result: &AggregateResult) -> Vec<HtmlRow> {
        result
            .files_by_coverage()
            .into_iter()
            .filter(|(_, stats)| stats.found > 0)
            .filter_map(|(path, stats)| {
                let feature = FeatureFolder::classify(path)?;
                Some(HtmlRow {
                    feature,
                    short_path: short_path(path).to_string(),
                    percent: stats.percent(),
                    hit: stats.hit,
                    found: stats.found,
                })
            })
            .collect()
    }

    /// Render the full document
    #[must_use]
    pub fn render(&self, result: &AggregateResult) -> String {
        let rows = Self::rows(result);
        let mut body = String::new();
        for row in &rows {
            let class = row.class().css();
            let _ = write!(
                body,
                r#"
                <tr>
                    <td>
                        <span class="feature-tag tag-{name}">{label}</span>
                        <div class="file-path">{path}</div>
                    </td>
                    <td style="text-align: center;">
                        <div class="coverage-text {class}">{percent:.1}%</div>
                        <div class="coverage-bar">
                            <div class="coverage-fill coverage-{class}" style="width: {width:.2}%"></div>
                        </div>
                    </td>
                    <td style="text-align: center;">
                        <div class="stats">{hit} / {found}</div>
                    </td>
                </tr>"#,
                name = row.feature.name(),
                label = row.feature.label(),
                path = escape_html(&row.short_path),
                percent = row.percent,
                width = row.bar_width(),
                hit = row.hit,
                found = row.found,
            );
        }

        let footer = self.generated_at.as_ref().map_or_else(String::new, |ts| {
            format!(
                "\n        <p class=\"timestamp\">Generated: {}</p>",
                escape_html(ts)
            )
        });

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{STYLE}    </style>
</head>
<body>
    <div class="container">
        <p class="summary">Overall: <strong>{overall:.1}%</strong> ({hit} / {found} lines, {files} files)</p>
        <table>
            <thead>
                <tr>
                    <th>File</th>
                    <th style="text-align: center;">Coverage</th>
                    <th style="text-align: center;">Lines</th>
                </tr>
            </thead>
            <tbody>{body}
            </tbody>
        </table>{footer}
    </div>
</body>
</html>
"#,
            title = escape_html(&self.title),
            overall = result.coverage_percent(),
            hit = result.total_hit,
            found = result.total_found,
            files = rows.len(),
        )
    }

    /// Render and write the report, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns error if the directory or file cannot be written
    pub fn save(&self, result: &AggregateResult, path: &Path) -> CovfoldResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.render(result))?;
        Ok(())
    }
}

const STYLE: &str = r"        * { margin: 0; padding: 0; box-sizing: border-box; }
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Ubuntu, sans-serif; background: #fff; padding: 5px; }
        .container { max-width: 100%; background: white; overflow: hidden; }
        .summary { font-size: 12px; color: #333; margin: 4px 10px 8px; }
        .timestamp { font-size: 10px; color: #999; margin: 8px 10px; }
        table { width: 100%; border-collapse: collapse; }
        thead { background: #f8f9fa; }
        th { text-align: left; padding: 6px 10px; font-weight: 600; color: #666; font-size: 10px; text-transform: uppercase; letter-spacing: 0.3px; border-bottom: 2px solid #eee; }
        td { padding: 5px 10px; border-bottom: 1px solid #f0f0f0; }
        tr:hover { background: #f8f9fa; }
        .file-path { font-family: 'Consolas', 'Monaco', monospace; font-size: 11px; color: #333; }
        .coverage-bar { width: 100%; height: 4px; background: #e0e0e0; border-radius: 2px; overflow: hidden; margin-top: 2px; }
        .coverage-fill { height: 100%; border-radius: 2px; }
        .coverage-high { background: linear-gradient(90deg, #10b981 0%, #059669 100%); }
        .coverage-medium { background: linear-gradient(90deg, #f59e0b 0%, #d97706 100%); }
        .coverage-low { background: linear-gradient(90deg, #ef4444 0%, #dc2626 100%); }
        .coverage-text { font-weight: 600; font-size: 11px; }
        .high { color: #10b981; }
        .medium { color: #f59e0b; }
        .low { color: #ef4444; }
        .stats { font-size: 10px; color: #666; }
        .feature-tag { display: inline-block; padding: 2px 5px; border-radius: 2px; font-size: 9px; font-weight: 600; margin-right: 5px; }
        .tag-media { background: #dbeafe; color: #1e40af; }
        .tag-profile { background: #fce7f3; color: #9f1239; }
        .tag-trends { background: #dcfce7; color: #166534; }
        .tag-settings { background: #fef3c7; color: #92400e; }
";
