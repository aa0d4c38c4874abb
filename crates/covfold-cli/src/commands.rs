//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use covfold::{CountSource, Preset};
use std::path::PathBuf;

/// Covfold: LCOV coverage summaries per feature folder
#[derive(Parser, Debug)]
#[command(name = "covfold")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// YAML file with default input, target and filter rules
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a coverage table and distance to target
    Summary(SummaryArgs),

    /// Generate an HTML coverage report
    Html(HtmlArgs),

    /// List built-in presets
    Presets,
}

/// Input and filter selection shared by all report commands
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// LCOV file to read [default: coverage/lcov.info]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Built-in filter preset
    #[arg(short, long)]
    pub preset: Option<PresetArg>,

    /// Keep files whose path contains this fragment (repeatable)
    #[arg(long = "require", value_name = "FRAGMENT")]
    pub require: Vec<String>,

    /// Drop files whose path contains this fragment (repeatable)
    #[arg(long = "exclude", value_name = "FRAGMENT")]
    pub exclude: Vec<String>,

    /// Drop files whose path matches this regex (repeatable)
    #[arg(long = "exclude-regex", value_name = "REGEX")]
    pub exclude_regex: Vec<String>,

    /// Where found/hit counts come from
    #[arg(long)]
    pub counts: Option<CountsArg>,

    /// Report title
    #[arg(long)]
    pub title: Option<String>,
}

/// Arguments for the summary command
#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// Input and filter selection
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Coverage target in percent [default: 95]
    #[arg(short, long)]
    pub target: Option<f64>,

    /// Show only the N lowest covered files
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: SummaryFormat,
}

/// Arguments for the html command
#[derive(Args, Debug, Clone)]
pub struct HtmlArgs {
    /// Input and filter selection (preset defaults to `features`)
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output file path
    #[arg(short, long, default_value = covfold::report::DEFAULT_HTML_PATH)]
    pub output: PathBuf,

    /// Open report in browser after generation
    #[arg(long)]
    pub open: bool,
}

/// Summary output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SummaryFormat {
    /// Fixed-width table
    #[default]
    Text,
    /// JSON summary
    Json,
}

/// Built-in preset argument
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresetArg {
    /// Profile logic, no widgets/views/generated files
    Profile,
    /// Every profile file except tests and generated code
    ProfileAll,
    /// Media feature (LF/LH counts)
    Media,
    /// Settings feature (LF/LH counts)
    Settings,
    /// Media, profile, trends and settings
    Features,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Profile => Self::Profile,
            PresetArg::ProfileAll => Self::ProfileAll,
            PresetArg::Media => Self::Media,
            PresetArg::Settings => Self::Settings,
            PresetArg::Features => Self::Features,
        }
    }
}

/// Count source argument
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountsArg {
    /// Count DA entries
    Entries,
    /// Use LF/LH summary lines
    Summary,
}

impl From<CountsArg> for CountSource {
    fn from(arg: CountsArg) -> Self {
        match arg {
            CountsArg::Entries => Self::Entries,
            CountsArg::Summary => Self::Summary,
        }
    }
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Auto-detect
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
