//! # verity-core
//!
//! Foundation crate for the Verity article classifier.
//! Defines the record and label model, the proportion table, config, errors,
//! traits, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{LabelPolicy, LikelihoodFormula, VerityConfig};
pub use errors::{ConfigError, VerityError, VerityResult};
pub use models::{
    Attribute, ClassLabels, ClassPair, ClassificationResult, FeatureVector, Label,
    LabeledExample, ProportionTable, RawExample, TrainingSet,
};
