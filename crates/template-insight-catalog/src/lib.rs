//! Issue-kind catalog: the registry that maps issue codes to presentation
//! metadata, plus the built-in descriptions used when a registry has no entry.
//!
//! Registry loading is the only IO in this crate and is confined to
//! [`IssueRegistry::load_file`].

#![forbid(unsafe_code)]

pub mod builtin;
mod error;
mod registry;
mod severity;

pub use builtin::{builtin_kind, unknown_kind};
pub use error::LoadError;
pub use registry::IssueRegistry;
pub use severity::parse_severity;
