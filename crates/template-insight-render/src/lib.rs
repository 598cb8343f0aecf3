//! Renderers for analysis results (JSON document, plain text).

#![forbid(unsafe_code)]

mod json;
mod text;

#[cfg(test)]
mod proptests;

pub use json::{serialize_json, serialize_json_pretty};
pub use text::render_text;
