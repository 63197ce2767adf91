use serde::{Deserialize, Serialize};

use crate::models::Attribute;

/// One modeled attribute and the values the estimator enumerates for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeledAttribute {
    pub attribute: Attribute,
    pub values: Vec<String>,
}

impl ModeledAttribute {
    pub fn new(attribute: Attribute, values: &[&str]) -> Self {
        Self {
            attribute,
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Model `attribute` over its full built-in vocabulary.
    pub fn with_vocabulary(attribute: Attribute) -> Self {
        Self::new(attribute, attribute.vocabulary())
    }
}

/// Which attributes take part in estimation and classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub modeled_attributes: Vec<ModeledAttribute>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            modeled_attributes: Attribute::DEFAULT_MODELED
                .into_iter()
                .map(ModeledAttribute::with_vocabulary)
                .collect(),
        }
    }
}
