/// Verity system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sentinel for an unset attribute. Never matches an aggregation query.
pub const UNKNOWN_VALUE: &str = "unknown";

/// Label string of class A (fabricated articles).
pub const DEFAULT_CLASS_A_LABEL: &str = "false";

/// Label string of class B (genuine articles).
pub const DEFAULT_CLASS_B_LABEL: &str = "true";

/// Scores below this are classified as class B.
pub const DEFAULT_DECISION_THRESHOLD: f64 = 0.5;

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "VERITY_LOG";
