use crate::models::{ClassificationResult, FeatureVector, ProportionTable};

/// Scores a query article against a proportion table.
pub trait IClassifier: Send + Sync {
    fn classify(&self, table: &ProportionTable, query: &FeatureVector) -> ClassificationResult;
}
