//! Error handling for Verity.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod verity_error;

pub use config_error::ConfigError;
pub use verity_error::{VerityError, VerityResult};
