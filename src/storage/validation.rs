//! Name validation
//!
//! Rejects unsafe or reserved entry names before any filesystem access.

use crate::error::StorageError;

/// Names starting with this marker are internal artifacts (the metadata
/// document, upload temporaries) and are invisible to every user-facing
/// operation.
pub const RESERVED_MARKER: char = '.';

/// Whether `name` belongs to the reserved internal namespace.
pub fn is_reserved_name(name: &str) -> bool {
    name.starts_with(RESERVED_MARKER)
}

/// Validate a user-supplied entry name.
///
/// Rejects empty names, anything that could escape the user root, and
/// names in the reserved namespace. Must be called before any lookup.
pub fn validate_entry_name(name: &str) -> Result<(), StorageError> {
    if name.is_empty() {
        return Err(StorageError::InvalidName("empty file name".into()));
    }
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(StorageError::PathTraversal(name.into()));
    }
    if is_reserved_name(name) {
        return Err(StorageError::InvalidTarget(name.into()));
    }
    Ok(())
}
