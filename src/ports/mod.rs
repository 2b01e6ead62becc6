//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the core and an external
//! system (time, filesystem, IDs, shell, spec storage, task execution).
//! Implementations live in `src/adapters/` and `src/store/`.

pub mod clock;
pub mod filesystem;
pub mod id_gen;
pub mod shell;
pub mod spec_repo;
pub mod task_executor;

use std::future::Future;
use std::pin::Pin;

pub use clock::Clock;
pub use filesystem::FileSystem;
pub use id_gen::IdGenerator;
pub use shell::{ShellExecutor, ShellOutput};
pub use spec_repo::{SpecRepository, StoredSpec};
pub use task_executor::{SpecContext, TaskExecutor, TaskOutcome};

/// Error type returned across port boundaries.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Boxed future returned by async ports, keeping the traits dyn-compatible.
pub type PortFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, PortError>> + Send + 'a>>;
