use super::ConfigError;

/// Top-level error for every Verity operation that can fail.
///
/// Numeric edge cases are not errors: zero denominators and unknown
/// attribute values resolve to `0.0` proportions.
#[derive(Debug, thiserror::Error)]
pub enum VerityError {
    #[error("invalid label '{label}': expected '{class_a}' or '{class_b}'")]
    InvalidLabel {
        label: String,
        class_a: String,
        class_b: String,
    },

    #[error("unknown attribute: {name}")]
    UnknownAttribute { name: String },

    #[error("attribute {attribute} is not modeled by this proportion table")]
    UnmodeledAttribute { attribute: String },

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {message}")]
    Serialization { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },
}

impl From<serde_json::Error> for VerityError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for VerityError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type VerityResult<T> = Result<T, VerityError>;
