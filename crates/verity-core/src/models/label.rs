use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CLASS_A_LABEL, DEFAULT_CLASS_B_LABEL};
use crate::errors::{VerityError, VerityResult};

/// The two mutually exclusive classes an article can belong to.
///
/// `Fabricated` is class A: the class whose likelihood the classifier scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Fabricated,
    Genuine,
}

impl Label {
    pub const ALL: [Label; 2] = [Label::Fabricated, Label::Genuine];

    pub fn other(self) -> Self {
        match self {
            Self::Fabricated => Self::Genuine,
            Self::Genuine => Self::Fabricated,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fabricated => f.write_str("fabricated"),
            Self::Genuine => f.write_str("genuine"),
        }
    }
}

/// The label strings that identify each class in raw training data.
///
/// Matching is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassLabels {
    /// Raw label of [`Label::Fabricated`].
    pub class_a: String,
    /// Raw label of [`Label::Genuine`].
    pub class_b: String,
}

impl ClassLabels {
    pub fn new(class_a: impl Into<String>, class_b: impl Into<String>) -> Self {
        Self {
            class_a: class_a.into(),
            class_b: class_b.into(),
        }
    }

    /// Match a raw label against the two recognized strings.
    pub fn parse(&self, raw: &str) -> Option<Label> {
        if raw == self.class_a {
            Some(Label::Fabricated)
        } else if raw == self.class_b {
            Some(Label::Genuine)
        } else {
            None
        }
    }

    /// Like [`parse`](Self::parse) but fails with `InvalidLabel`.
    pub fn resolve(&self, raw: &str) -> VerityResult<Label> {
        self.parse(raw).ok_or_else(|| VerityError::InvalidLabel {
            label: raw.to_string(),
            class_a: self.class_a.clone(),
            class_b: self.class_b.clone(),
        })
    }

    /// Raw label string for `label`.
    pub fn raw(&self, label: Label) -> &str {
        match label {
            Label::Fabricated => &self.class_a,
            Label::Genuine => &self.class_b,
        }
    }
}

impl Default for ClassLabels {
    fn default() -> Self {
        Self::new(DEFAULT_CLASS_A_LABEL, DEFAULT_CLASS_B_LABEL)
    }
}
