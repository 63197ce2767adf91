//! Span definitions per operation: estimation and classification.

/// Create an estimation span.
#[macro_export]
macro_rules! estimation_span {
    ($examples:expr) => {
        tracing::info_span!(
            $crate::tracing_setup::spans::names::ESTIMATE,
            examples = $examples
        )
    };
}

/// Create a classification span.
#[macro_export]
macro_rules! classification_span {
    ($formula:expr) => {
        tracing::info_span!(
            $crate::tracing_setup::spans::names::CLASSIFY,
            formula = %$formula
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ESTIMATE: &str = "verity.estimate";
    pub const CLASSIFY: &str = "verity.classify";
}
