//! Pure diagnostic analysis (no IO).
//!
//! Input: raw compiler output, an analysis policy, and a populated issue registry.
//! Output: resolved, filtered issues plus summary data about the run.

#![forbid(unsafe_code)]

pub mod detectors;
pub mod model;
pub mod observe;
pub mod policy;
pub mod report;

mod engine;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_support;

pub use engine::{Analyzer, analyze};
