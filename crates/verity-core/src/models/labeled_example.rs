use serde::{Deserialize, Serialize};

use super::{ClassLabels, FeatureVector, Label};
use crate::constants::UNKNOWN_VALUE;
use crate::errors::VerityResult;

/// A training article whose label has been checked against the class labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledExample {
    features: FeatureVector,
    label: Label,
}

impl LabeledExample {
    pub fn new(features: FeatureVector, label: Label) -> Self {
        Self { features, label }
    }

    /// Construct from a raw label string, failing with `InvalidLabel` when
    /// it matches neither class.
    pub fn parse(
        features: FeatureVector,
        raw_label: &str,
        labels: &ClassLabels,
    ) -> VerityResult<Self> {
        let label = labels.resolve(raw_label)?;
        Ok(Self { features, label })
    }

    pub fn features(&self) -> &FeatureVector {
        &self.features
    }

    pub fn label(&self) -> Label {
        self.label
    }
}

/// A training article as supplied by the data-loading collaborator, before
/// its label string has been checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawExample {
    #[serde(default)]
    pub features: FeatureVector,
    #[serde(default = "unknown_label")]
    pub label: String,
}

impl RawExample {
    pub fn new(features: FeatureVector, label: impl Into<String>) -> Self {
        Self {
            features,
            label: label.into(),
        }
    }
}

impl Default for RawExample {
    fn default() -> Self {
        Self {
            features: FeatureVector::unknown(),
            label: unknown_label(),
        }
    }
}

fn unknown_label() -> String {
    UNKNOWN_VALUE.to_string()
}
