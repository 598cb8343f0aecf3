//! Use case orchestration for template-insight.
//!
//! This crate provides the application layer: use cases that coordinate the settings, catalog,
//! domain, and render layers. The CLI crate depends on this; it only handles argument parsing,
//! I/O, and exit codes.

#![forbid(unsafe_code)]

mod analyze;
mod config;
mod explain;
mod observer;
mod render;

pub use analyze::{AnalyzeInput, AnalyzeOutput, load_registry, run_analyze};
pub use config::resolve_settings;
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use observer::TracingObserver;
pub use render::{render_output, write_output};
