//! # verity-observability
//!
//! Tracing subscriber setup, span definitions for estimation and
//! classification, and the reporters that render classification results.

pub mod report;
pub mod tracing_setup;

pub use report::{ClassificationReport, JsonReporter, TextReporter};
pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
