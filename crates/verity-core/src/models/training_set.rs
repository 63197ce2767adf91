use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{ClassLabels, LabeledExample, RawExample};
use crate::config::LabelPolicy;
use crate::errors::VerityResult;

/// The labeled articles a proportion table is estimated from.
///
/// Examples dropped at ingestion under [`LabelPolicy::Skip`] still count
/// toward [`total`](Self::total), so class priors over a set with dropped
/// examples sum to less than one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSet {
    examples: Vec<LabeledExample>,
    dropped: usize,
}

impl TrainingSet {
    pub fn new(examples: Vec<LabeledExample>) -> Self {
        Self {
            examples,
            dropped: 0,
        }
    }

    /// Check every raw label and build a training set.
    ///
    /// Under `Reject` the first unrecognized label aborts ingestion with
    /// `InvalidLabel`. Under `Skip` the example is left out of both classes
    /// but remains in the total.
    pub fn ingest(
        raw: impl IntoIterator<Item = RawExample>,
        labels: &ClassLabels,
        policy: LabelPolicy,
    ) -> VerityResult<Self> {
        let mut examples = Vec::new();
        let mut dropped = 0;

        for (index, record) in raw.into_iter().enumerate() {
            match labels.resolve(&record.label) {
                Ok(label) => examples.push(LabeledExample::new(record.features, label)),
                Err(err) => match policy {
                    LabelPolicy::Reject => return Err(err),
                    LabelPolicy::Skip => {
                        warn!(
                            index,
                            label = %record.label,
                            "skipping example with unrecognized label"
                        );
                        dropped += 1;
                    }
                },
            }
        }

        Ok(Self { examples, dropped })
    }

    pub fn examples(&self) -> &[LabeledExample] {
        &self.examples
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabeledExample> {
        self.examples.iter()
    }

    /// Number of examples that carry a recognized label.
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// True when no example carries a recognized label, matching [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Examples skipped at ingestion for an unrecognized label.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Prior denominator: kept plus dropped examples.
    pub fn total(&self) -> usize {
        self.examples.len() + self.dropped
    }
}

impl FromIterator<LabeledExample> for TrainingSet {
    fn from_iter<I: IntoIterator<Item = LabeledExample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
