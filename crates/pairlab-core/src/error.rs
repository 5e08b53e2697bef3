//! Error types for the PairLab application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire PairLab application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. Variants split into two
/// groups: operator notices (a pairing rule refused the request) and real
/// faults (storage, serialization, remote services). Use [`is_warning`] to
/// tell them apart when rendering.
///
/// [`is_warning`]: PairlabError::is_warning
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum PairlabError {
    /// The selection already holds the maximum number of participants
    #[error("Selection limit reached: only {limit} participants can be selected")]
    CapacityExceeded { limit: usize },

    /// A pair operation needs exactly two selected participants
    #[error("Exactly 2 participants must be selected (currently {selected})")]
    IncompleteSelection { selected: usize },

    /// A participant cannot be paired with themselves
    #[error("Participant '{id}' cannot be paired with themselves")]
    DuplicateParticipant { id: String },

    /// The two participants share no availability
    #[error("No common time slots between {a} and {b}")]
    NoOverlap { a: String, b: String },

    /// No pairable candidates in the current pool
    #[error("No candidates available: {0}")]
    NoCandidates(String),

    /// Disallowed match status change
    #[error("Invalid match status change: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Storage error (file system and repository layer)
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", "TOML", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote service error (chat completions endpoint)
    #[error("Remote service error: {message}")]
    Remote {
        status: Option<u16>,
        message: String,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PairlabError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a NoCandidates error
    pub fn no_candidates(message: impl Into<String>) -> Self {
        Self::NoCandidates(message.into())
    }

    /// Creates a Remote error without an HTTP status
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            status: None,
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a Storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this error is an operator notice rather than a fault.
    ///
    /// Returns true for the pairing-rule refusals: over-capacity selection,
    /// incomplete selection, self-pairing, missing overlap, and an empty
    /// candidate pool. Presentation layers render these as warnings and keep
    /// going; everything else is a real error.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::CapacityExceeded { .. }
                | Self::IncompleteSelection { .. }
                | Self::DuplicateParticipant { .. }
                | Self::NoOverlap { .. }
                | Self::NoCandidates(_)
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for PairlabError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for PairlabError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for PairlabError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for PairlabError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from String (for error messages)
impl From<String> for PairlabError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, PairlabError>`.
pub type Result<T> = std::result::Result<T, PairlabError>;
