//! # verity-estimator
//!
//! Partitions labeled articles by class and computes class priors plus
//! per-class conditional proportions for every modeled attribute value.
//! Zero denominators resolve to `0.0`, never NaN.

pub mod engine;
pub mod partition;
pub mod proportion;

pub use engine::ProportionEstimator;
pub use partition::{partition, Partition};
pub use proportion::{class_prior, conditional_proportion};
