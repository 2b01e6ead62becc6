//! Command dispatch and handlers.

pub mod analyze;
pub mod create;
pub mod execute;
pub mod list;
pub mod related;
pub mod show;
pub mod tasks;

use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::store::SpecStore;

/// Dispatch a parsed command to its handler using live adapters.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command, config: &Config) -> Result<(), String> {
    let ctx = ServiceContext::live();
    dispatch_with_context(command, &ctx, config)
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &Config,
) -> Result<(), String> {
    let store = SpecStore::new(ctx, &config.store_root);
    match command {
        Command::Analyze { text, json } => analyze::run(text, *json),
        Command::Create { text, parent_check } => {
            create::run(ctx, &store, config, text, *parent_check)
        }
        Command::Show { id: Some(id) } => show::run(&store, id),
        Command::Show { id: None } | Command::List => list::run(&store),
        Command::Related { id, limit, min_score } => {
            related::run(&store, config, id, *limit, *min_score)
        }
        Command::Tasks { id } => tasks::run(&store, id),
        Command::Execute { target } => execute::run(ctx, &store, config, target),
    }
}
