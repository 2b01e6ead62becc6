//! Markdown rendering of new spec documents.

pub mod document;
mod templates;

pub use document::{format_document, task_breakdown, task_id, GeneratedLayer, GeneratedTask};
