//! Service context bundling all port trait objects.

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::id_gen::LiveIdGenerator;
use crate::adapters::live::shell::LiveShellExecutor;
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::ports::id_gen::IdGenerator;
use crate::ports::shell::ShellExecutor;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Tests build the
/// struct directly with in-memory fakes.
pub struct ServiceContext {
    /// Clock for timestamps and run durations.
    pub clock: Box<dyn Clock>,
    /// Filesystem for the spec store.
    pub fs: Box<dyn FileSystem>,
    /// Shell executor for task commands.
    pub shell: Box<dyn ShellExecutor>,
    /// ID generator for new specs.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for every port.
    #[must_use]
    pub fn live() -> Self {
        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            shell: Box::new(LiveShellExecutor),
            id_gen: Box::new(LiveIdGenerator),
        }
    }
}
