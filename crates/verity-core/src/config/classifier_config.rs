use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DECISION_THRESHOLD;
use crate::errors::ConfigError;

/// How the two partial scores are combined into a class-A score.
///
/// Both formulas share the same degenerate-case handling: a zero class-A
/// score yields `1.0`, otherwise a zero class-B score yields `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikelihoodFormula {
    /// `a / (a * b)`, which reduces to `1 / b`. Kept for parity with
    /// historical scores.
    #[default]
    Literal,
    /// `a / (a + b)`, the normalized Naive Bayes posterior for class A.
    Normalized,
}

impl LikelihoodFormula {
    pub fn name(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Normalized => "normalized",
        }
    }
}

impl fmt::Display for LikelihoodFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LikelihoodFormula {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "literal" => Ok(Self::Literal),
            "normalized" => Ok(Self::Normalized),
            other => Err(ConfigError::ValidationFailed {
                field: "classifier.formula".to_string(),
                message: format!("unknown formula '{other}'"),
            }),
        }
    }
}

/// Classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub formula: LikelihoodFormula,
    /// Scores strictly below this decide class B.
    pub decision_threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            formula: LikelihoodFormula::default(),
            decision_threshold: DEFAULT_DECISION_THRESHOLD,
        }
    }
}
