//! Configuration for Verity.
//! TOML-based, resolution order: env > file > compiled defaults.

pub mod classifier_config;
pub mod ingestion_config;
pub mod model_config;
pub mod observability_config;
pub mod verity_config;

pub use classifier_config::{ClassifierConfig, LikelihoodFormula};
pub use ingestion_config::{IngestionConfig, LabelPolicy};
pub use model_config::{ModelConfig, ModeledAttribute};
pub use observability_config::ObservabilityConfig;
pub use verity_config::VerityConfig;
