//! # verity-classifier
//!
//! Combines class priors and conditional proportions into a class-A
//! likelihood score, applies the degenerate-case policy, and maps the
//! score to a decision. The driver wires estimation and classification
//! together for a single query.

pub mod decision;
pub mod driver;
pub mod engine;
pub mod formula;

pub use decision::decide;
pub use driver::ClassificationDriver;
pub use engine::LikelihoodClassifier;
pub use formula::{classify, combine, partial_score, Combined};
