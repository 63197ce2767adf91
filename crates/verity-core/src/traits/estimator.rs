use crate::models::{ProportionTable, TrainingSet};

/// Turns a labeled training set into a proportion table.
pub trait IProportionEstimator: Send + Sync {
    /// Pure function of the training set: no side effects, same input same table.
    fn estimate(&self, training: &TrainingSet) -> ProportionTable;
}
