//! LikelihoodClassifier: scores a query against a proportion table.

use tracing::debug;
use verity_core::config::{ClassifierConfig, LikelihoodFormula};
use verity_core::constants::DEFAULT_DECISION_THRESHOLD;
use verity_core::models::{ClassPair, ClassificationResult, FeatureVector, Label, ProportionTable};
use verity_core::traits::IClassifier;

use crate::decision::decide;
use crate::formula::{combine, partial_score};

/// Classifier over the attributes a proportion table models.
///
/// Only modeled attributes are consulted; inert attributes of the query
/// never affect the score.
#[derive(Debug, Clone, Copy)]
pub struct LikelihoodClassifier {
    formula: LikelihoodFormula,
    threshold: f64,
}

impl LikelihoodClassifier {
    /// Literal formula, threshold 0.5.
    pub fn new() -> Self {
        Self {
            formula: LikelihoodFormula::default(),
            threshold: DEFAULT_DECISION_THRESHOLD,
        }
    }

    pub fn with_formula(formula: LikelihoodFormula) -> Self {
        Self {
            formula,
            ..Self::new()
        }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self {
            formula: config.formula,
            threshold: config.decision_threshold,
        }
    }

    pub fn formula(&self) -> LikelihoodFormula {
        self.formula
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Look up the query's conditionals, combine them, and decide.
    pub fn classify(&self, table: &ProportionTable, query: &FeatureVector) -> ClassificationResult {
        let evidence: Vec<_> = table
            .modeled_attributes()
            .map(|attribute| {
                let value = query.get(attribute);
                let conditionals =
                    ClassPair::from_fn(|label| table.conditional(label, attribute, value));
                (attribute, value.to_string(), conditionals)
            })
            .collect();

        let partial_scores = ClassPair::from_fn(|label| {
            let conditionals: Vec<f64> = evidence.iter().map(|(_, _, c)| *c.get(label)).collect();
            partial_score(table.prior(label), &conditionals)
        });

        let combined = combine(
            partial_scores.fabricated,
            partial_scores.genuine,
            self.formula,
        );
        let decision = decide(combined.score, self.threshold);

        if combined.degenerate {
            let zero_class = if partial_scores.fabricated == 0.0 {
                Label::Fabricated
            } else {
                Label::Genuine
            };
            debug!(
                zero_class = %zero_class,
                score = combined.score,
                "degenerate partial score short-circuited the ratio"
            );
        }

        ClassificationResult {
            score: combined.score,
            decision,
            partial_scores,
            evidence,
            formula: self.formula,
            degenerate: combined.degenerate,
        }
    }

    /// Classify several queries against the same table.
    pub fn classify_batch(
        &self,
        table: &ProportionTable,
        queries: &[FeatureVector],
    ) -> Vec<ClassificationResult> {
        queries.iter().map(|q| self.classify(table, q)).collect()
    }
}

impl Default for LikelihoodClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IClassifier for LikelihoodClassifier {
    fn classify(&self, table: &ProportionTable, query: &FeatureVector) -> ClassificationResult {
        LikelihoodClassifier::classify(self, table, query)
    }
}
