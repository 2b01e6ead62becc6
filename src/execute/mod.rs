//! Checklist execution over stored specs.

pub mod engine;

pub use engine::{format_elapsed, EngineError, ExecutionEngine, ExecutionResult, RunState};
