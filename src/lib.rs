//! Core library for the `specflow` CLI.
//!
//! Classifies free-text feature requests, renders them into spec
//! documents with an implementation checklist, suggests relationships
//! between specs, and executes checklists task by task.

pub mod adapters;
pub mod analyze;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod execute;
pub mod format;
pub mod logging;
pub mod plan;
pub mod ports;
pub mod relate;
pub mod spec;
pub mod store;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing, configuration loading or
/// command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    let config = config::Config::load().map_err(|err| err.to_string())?;
    logging::init(cli.verbose, &config.log_level);
    commands::dispatch(&cli.command, &config)
}
