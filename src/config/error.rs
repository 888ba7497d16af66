//! Configuration error types.

use crate::error::DispenseError;
use thiserror::Error;

/// Errors raised while reading or writing a dispenser configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config could not be encoded as JSON or bincode
    #[error("Could not encode dispenser config: {0}")]
    SerializationFailed(String),

    /// The document is not a well-formed dispenser config
    #[error("Could not decode dispenser config: {0}")]
    DeserializationFailed(String),

    /// The document was written for a different config format version
    #[error("Dispenser config version {found} is not understood (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The configured notes do not form a valid denomination set
    #[error(transparent)]
    InvalidDenominations(#[from] DispenseError),
}
