//! Storage error types for clinic-store.

use std::path::PathBuf;

use clinic_core::enums::EntityType;
use thiserror::Error;

/// Errors from repository and file operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A CSV file could not be parsed or written.
    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Underlying file system error.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Lookup by ID returned no record.
    #[error("Record not found: {entity} {id}")]
    NotFound { entity: EntityType, id: String },

    /// Insert with an ID, or a patient NHS number, that is already taken.
    #[error("Duplicate {entity}: {id} already exists")]
    Duplicate { entity: EntityType, id: String },

    /// Insert with an ID that does not match the entity's prefix format.
    #[error("Invalid ID '{id}' for {entity}: expected '{prefix}' followed by at least 3 digits")]
    InvalidId {
        entity: EntityType,
        id: String,
        prefix: String,
    },

    /// A status change not allowed by the entity's state machine.
    #[error("Invalid status transition: {entity} {id} from {from} to {to}")]
    InvalidTransition {
        entity: EntityType,
        id: String,
        from: String,
        to: String,
    },

    /// Data failed validation (required fields, uniqueness).
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON encoding of an audit payload failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn not_found(entity: EntityType, id: &str) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Whether this error means the requested record does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
