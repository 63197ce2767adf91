//! ClassificationDriver: training data in, decision out.

use tracing::info;
use verity_core::config::{LabelPolicy, VerityConfig};
use verity_core::errors::VerityResult;
use verity_core::models::{
    ClassLabels, ClassificationResult, FeatureVector, ProportionTable, RawExample, TrainingSet,
};
use verity_estimator::ProportionEstimator;

use crate::engine::LikelihoodClassifier;

/// Wires ingestion, estimation, and classification for one configuration.
#[derive(Debug, Clone)]
pub struct ClassificationDriver {
    labels: ClassLabels,
    policy: LabelPolicy,
    estimator: ProportionEstimator,
    classifier: LikelihoodClassifier,
}

impl ClassificationDriver {
    /// Build a driver from `config`, refusing configs that fail validation.
    pub fn new(config: &VerityConfig) -> VerityResult<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: &VerityConfig) -> Self {
        Self {
            labels: config.labels.clone(),
            policy: config.ingestion.label_policy,
            estimator: ProportionEstimator::from_config(&config.model),
            classifier: LikelihoodClassifier::from_config(&config.classifier),
        }
    }

    pub fn labels(&self) -> &ClassLabels {
        &self.labels
    }

    pub fn classifier(&self) -> &LikelihoodClassifier {
        &self.classifier
    }

    /// Check raw labels under the configured policy.
    pub fn ingest(&self, raw: impl IntoIterator<Item = RawExample>) -> VerityResult<TrainingSet> {
        TrainingSet::ingest(raw, &self.labels, self.policy)
    }

    pub fn train(&self, training: &TrainingSet) -> ProportionTable {
        self.estimator.estimate(training)
    }

    pub fn classify(&self, table: &ProportionTable, query: &FeatureVector) -> ClassificationResult {
        let span = verity_observability::classification_span!(self.classifier.formula());
        let _guard = span.enter();

        let result = self.classifier.classify(table, query);
        info!(
            score = result.score,
            decision = self.labels.raw(result.decision),
            degenerate = result.degenerate,
            "article classified"
        );
        result
    }

    /// Estimate a table from `training` and classify `query` against it.
    pub fn run(&self, training: &TrainingSet, query: &FeatureVector) -> ClassificationResult {
        let table = self.train(training);
        self.classify(&table, query)
    }

    /// Ingest, estimate, and classify in one step.
    pub fn run_raw(
        &self,
        raw: impl IntoIterator<Item = RawExample>,
        query: &FeatureVector,
    ) -> VerityResult<ClassificationResult> {
        let training = self.ingest(raw)?;
        Ok(self.run(&training, query))
    }
}

impl Default for ClassificationDriver {
    fn default() -> Self {
        Self::from_valid(&VerityConfig::default())
    }
}
