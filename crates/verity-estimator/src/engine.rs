//! ProportionEstimator: one pass per class over the modeled attribute table.

use tracing::{debug, info};
use verity_core::config::{ModelConfig, ModeledAttribute};
use verity_core::models::{
    AttributeProportions, ClassPair, Label, ProportionTable, TrainingSet, ValueProportions,
};
use verity_core::traits::IProportionEstimator;

use crate::partition::partition;
use crate::proportion::{class_prior, conditional_proportion};

/// Builds [`ProportionTable`]s for a fixed list of modeled attributes.
#[derive(Debug, Clone)]
pub struct ProportionEstimator {
    modeled: Vec<ModeledAttribute>,
}

impl ProportionEstimator {
    /// Estimator over source trust, length bucket, and keyword density.
    pub fn new() -> Self {
        Self::from_config(&ModelConfig::default())
    }

    pub fn from_config(config: &ModelConfig) -> Self {
        Self {
            modeled: config.modeled_attributes.clone(),
        }
    }

    pub fn with_attributes(modeled: Vec<ModeledAttribute>) -> Self {
        Self { modeled }
    }

    pub fn modeled(&self) -> &[ModeledAttribute] {
        &self.modeled
    }

    /// Compute priors and conditionals for every (attribute, value, class).
    pub fn estimate(&self, training: &TrainingSet) -> ProportionTable {
        let span = verity_observability::estimation_span!(training.len());
        let _guard = span.enter();

        let split = partition(training.iter());
        let total = training.total();

        let class_counts = ClassPair::from_fn(|label| split.class(label).len());
        let priors = ClassPair::from_fn(|label| class_prior(split.class(label), total));
        for label in Label::ALL {
            debug!(
                class = %label,
                count = *class_counts.get(label),
                prior = *priors.get(label),
                "class partitioned"
            );
        }

        let attributes = self
            .modeled
            .iter()
            .map(|m| AttributeProportions {
                attribute: m.attribute,
                values: m
                    .values
                    .iter()
                    .map(|value| ValueProportions {
                        value: value.clone(),
                        proportions: ClassPair::from_fn(|label| {
                            conditional_proportion(split.class(label), m.attribute, value)
                        }),
                    })
                    .collect(),
            })
            .collect();

        info!(
            total,
            dropped = training.dropped(),
            attributes = self.modeled.len(),
            "proportion table estimated"
        );

        ProportionTable::new(total, class_counts, priors, attributes)
    }
}

impl Default for ProportionEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl IProportionEstimator for ProportionEstimator {
    fn estimate(&self, training: &TrainingSet) -> ProportionTable {
        ProportionEstimator::estimate(self, training)
    }
}
