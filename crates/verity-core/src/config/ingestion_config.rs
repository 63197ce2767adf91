use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// What ingestion does with an example whose label matches neither class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPolicy {
    /// Fail with `InvalidLabel`.
    #[default]
    Reject,
    /// Leave the example out of both classes but keep it in the prior total.
    Skip,
}

impl FromStr for LabelPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(Self::Reject),
            "skip" => Ok(Self::Skip),
            other => Err(ConfigError::ValidationFailed {
                field: "ingestion.label_policy".to_string(),
                message: format!("unknown policy '{other}'"),
            }),
        }
    }
}

/// Training-data ingestion configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestionConfig {
    pub label_policy: LabelPolicy,
}
