//! Error handlers
//!
//! Maps storage errors to log lines and user-visible reply text.

use log::error;

use crate::error::types::StorageError;

/// Log a failed operation.
pub fn handle_error(err: &StorageError) {
    error!("Storage operation failed: {}", err);
}

/// Convert an error to the text shown to the user.
///
/// The transport renders this verbatim; wording stays generic for medium
/// errors so no path or io detail leaks into chat.
pub fn error_to_reply(err: &StorageError) -> String {
    match err {
        StorageError::NotFound(_) => "File not found.".to_string(),
        StorageError::InvalidName(_) | StorageError::PathTraversal(_) => {
            "That file name is not valid.".to_string()
        }
        StorageError::InvalidTarget(_) => {
            "That name is reserved and cannot be used.".to_string()
        }
        StorageError::WriteFailure(_) | StorageError::StorageUnavailable(_) => {
            "Storage is temporarily unavailable. Please try again later.".to_string()
        }
    }
}
