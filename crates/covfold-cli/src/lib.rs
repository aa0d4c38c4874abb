//! Covfold CLI Library
//!
//! Command-line interface over the covfold coverage aggregator.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{
    Cli, ColorArg, Commands, CountsArg, FilterArgs, HtmlArgs, PresetArg, SummaryArgs,
    SummaryFormat,
};
pub use config::{CliConfig, ColorChoice, FileConfig, Verbosity, DEFAULT_INPUT};
pub use error::{CliError, CliResult};
pub use output::{Reporter, Status};
