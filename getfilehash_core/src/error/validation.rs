//! Validation related error types

use thiserror::Error;

/// Validation and configuration errors
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The requested algorithm label does not map to a known digest
    #[error("Unsupported hash algorithm: {label}")]
    UnsupportedAlgorithm { label: String },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// A computation is already in flight in this slot
    #[error("A computation is already running in this slot")]
    SlotBusy,

    /// A slot transition that the state machine does not permit
    #[error("Invalid slot transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

impl ValidationError {
    /// Create an unsupported algorithm error
    pub fn unsupported_algorithm(label: &str) -> Self {
        Self::UnsupportedAlgorithm {
            label: label.to_string(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: &str) -> Self {
        Self::InvalidConfiguration {
            message: message.to_string(),
        }
    }

    /// Create an invalid transition error
    pub fn invalid_transition(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        Self::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
