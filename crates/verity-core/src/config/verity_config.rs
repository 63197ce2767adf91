//! Top-level Verity configuration.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{ClassifierConfig, IngestionConfig, ModelConfig, ObservabilityConfig};
use crate::constants::UNKNOWN_VALUE;
use crate::errors::ConfigError;
use crate::models::ClassLabels;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VERITY_*`)
/// 2. Config file passed to [`load`](Self::load)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerityConfig {
    pub labels: ClassLabels,
    pub model: ModelConfig,
    pub classifier: ClassifierConfig,
    pub ingestion: IngestionConfig,
    pub observability: ObservabilityConfig,
}

impl VerityConfig {
    /// Load configuration from an optional TOML file, then apply
    /// environment overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML string (no env layer, no validation).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `VERITY_*` overrides read through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("VERITY_FORMULA") {
            match val.parse() {
                Ok(v) => self.classifier.formula = v,
                Err(e) => warn!(error = %e, "ignoring VERITY_FORMULA"),
            }
        }
        if let Some(val) = lookup("VERITY_DECISION_THRESHOLD") {
            match val.parse::<f64>() {
                Ok(v) => self.classifier.decision_threshold = v,
                Err(e) => warn!(error = %e, "ignoring VERITY_DECISION_THRESHOLD"),
            }
        }
        if let Some(val) = lookup("VERITY_LABEL_POLICY") {
            match val.parse() {
                Ok(v) => self.ingestion.label_policy = v,
                Err(e) => warn!(error = %e, "ignoring VERITY_LABEL_POLICY"),
            }
        }
        if let Some(val) = lookup("VERITY_LOG_LEVEL") {
            self.observability.log_level = val;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let labels = &self.labels;
        for (field, value) in [
            ("labels.class_a", &labels.class_a),
            ("labels.class_b", &labels.class_b),
        ] {
            if value.is_empty() || value == UNKNOWN_VALUE {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: format!("must be non-empty and not '{UNKNOWN_VALUE}'"),
                });
            }
        }
        if labels.class_a == labels.class_b {
            return Err(ConfigError::ValidationFailed {
                field: "labels".to_string(),
                message: "class_a and class_b must differ".to_string(),
            });
        }

        let modeled = &self.model.modeled_attributes;
        if modeled.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "model.modeled_attributes".to_string(),
                message: "at least one attribute must be modeled".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for entry in modeled {
            let field = format!("model.modeled_attributes.{}", entry.attribute);
            if !seen.insert(entry.attribute) {
                return Err(ConfigError::ValidationFailed {
                    field,
                    message: "attribute modeled more than once".to_string(),
                });
            }
            if entry.values.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field,
                    message: "value list is empty".to_string(),
                });
            }
            let mut values = HashSet::new();
            for value in &entry.values {
                if value == UNKNOWN_VALUE || !values.insert(value.as_str()) {
                    return Err(ConfigError::ValidationFailed {
                        field,
                        message: format!("invalid or duplicate value '{value}'"),
                    });
                }
            }
        }

        if !self.classifier.decision_threshold.is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "classifier.decision_threshold".to_string(),
                message: "must be finite".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
