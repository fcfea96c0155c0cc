//! Error types for the Antillas core.

use thiserror::Error;

/// A shared error type for the Antillas workspace.
///
/// Typed, structured variants with automatic conversion from the common
/// error types produced by the storage and configuration adapters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AntillasError {
    /// A region identifier outside the supported set.
    #[error("Unsupported region: '{value}'")]
    InvalidRegion { value: String },

    /// The key-value storage collaborator failed.
    #[error("Storage unavailable during {operation}: {message}")]
    StorageUnavailable {
        operation: &'static str,
        message: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AntillasError {
    /// Creates an InvalidRegion error
    pub fn invalid_region(value: impl Into<String>) -> Self {
        Self::InvalidRegion {
            value: value.into(),
        }
    }

    /// Creates a StorageUnavailable error
    pub fn storage(operation: &'static str, message: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            operation,
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn is_invalid_region(&self) -> bool {
        matches!(self, Self::InvalidRegion { .. })
    }

    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for AntillasError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for AntillasError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for AntillasError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, AntillasError>`.
pub type Result<T> = std::result::Result<T, AntillasError>;
