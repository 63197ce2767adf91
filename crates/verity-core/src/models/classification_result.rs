use serde::{Deserialize, Serialize};

use super::{Attribute, ClassPair, Label};
use crate::config::LikelihoodFormula;

/// Outcome of classifying one query article.
///
/// `score` is a likelihood ratio for class A, not a probability. Under the
/// literal formula it is not bounded to `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub score: f64,
    pub decision: Label,
    /// Unnormalized prior × conditionals product per class.
    pub partial_scores: ClassPair<f64>,
    /// Conditionals that fed each partial score, in modeled-attribute order.
    pub evidence: Vec<(Attribute, String, ClassPair<f64>)>,
    pub formula: LikelihoodFormula,
    /// Set when a zero partial score short-circuited the ratio.
    pub degenerate: bool,
}

impl ClassificationResult {
    pub fn is_fabricated(&self) -> bool {
        self.decision == Label::Fabricated
    }
}
