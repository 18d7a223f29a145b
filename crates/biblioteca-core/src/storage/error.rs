//! Storage error handling
//!
//! Typed errors for storage operations. None of these are fatal to the
//! interactive shell; they surface as "operation did not apply".

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::InvalidStatus;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to create the directory holding the database file
    #[error("Failed to create data directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// SQLite database error
    #[error("Database error: {0}")]
    Database(#[source] rusqlite::Error),

    /// A stored status outside the read/unread enumeration
    #[error(transparent)]
    InvalidStatus(#[from] InvalidStatus),
}

impl From<rusqlite::Error> for StorageError {
    /// Lifts a rejected status column out of the generic conversion failure
    fn from(error: rusqlite::Error) -> Self {
        if let rusqlite::Error::FromSqlConversionFailure(_, _, ref source) = error {
            if let Some(invalid) = source.downcast_ref::<InvalidStatus>() {
                return StorageError::InvalidStatus(invalid.clone());
            }
        }
        StorageError::Database(error)
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
