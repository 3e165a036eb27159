//! Error types
//!
//! Defines the domain errors surfaced by the storage subsystem.

use std::fmt;
use std::io;

/// Errors raised by blob, metadata and tree operations.
///
/// Every variant maps to a user-visible rejection; none of them is fatal
/// to the conversational session.
#[derive(Debug)]
pub enum StorageError {
    /// Requested file or tag record does not exist.
    NotFound(String),
    /// Name is empty or otherwise unusable as an entry name.
    InvalidName(String),
    /// Operation targeted a reserved internal name.
    InvalidTarget(String),
    /// Name tried to address something outside the user root.
    PathTraversal(String),
    /// Underlying write failed; no partial state was left behind.
    WriteFailure(io::Error),
    /// Storage medium cannot be used for this user right now.
    StorageUnavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NotFound(name) => write!(f, "Not found: {}", name),
            StorageError::InvalidName(name) => write!(f, "Invalid name: {}", name),
            StorageError::InvalidTarget(name) => write!(f, "Reserved name: {}", name),
            StorageError::PathTraversal(name) => write!(f, "Path traversal attempt: {}", name),
            StorageError::WriteFailure(e) => write!(f, "Write failed: {}", e),
            StorageError::StorageUnavailable(msg) => write!(f, "Storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::WriteFailure(error)
    }
}
