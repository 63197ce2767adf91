pub mod classifier;
pub mod estimator;
pub mod reporter;

pub use classifier::IClassifier;
pub use estimator::IProportionEstimator;
pub use reporter::IReporter;
