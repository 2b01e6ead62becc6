//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `specflow`.
#[derive(Debug, Parser)]
#[command(name = "specflow", version, about = "Classify, relate and execute feature specs")]
pub struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a feature request without saving anything.
    Analyze {
        /// Free-text feature request.
        text: String,
        /// Print the analysis as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Create a spec document from a feature request.
    Create {
        /// Free-text feature request.
        text: String,
        /// Link the new spec to a likely parent.
        #[arg(long)]
        parent_check: bool,
    },
    /// Show a spec, or list all specs when no ID is given.
    Show {
        /// Spec ID.
        id: Option<String>,
    },
    /// List stored specs.
    List,
    /// Suggest specs related to the given one.
    Related {
        /// Spec ID.
        id: String,
        /// Maximum number of suggestions.
        #[arg(long)]
        limit: Option<usize>,
        /// Minimum score for a suggestion.
        #[arg(long)]
        min_score: Option<f64>,
    },
    /// Show the implementation plan checklist of a spec.
    Tasks {
        /// Spec ID.
        id: String,
    },
    /// Execute the pending tasks of a spec.
    Execute {
        /// Spec ID or a search query.
        target: String,
    },
}
