//! User root resolution
//!
//! Maps an opaque user identifier to its isolated storage directory.

use log::error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Opaque numeric identifier of a bot user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(raw: u64) -> Self {
        UserId(raw)
    }
}

/// Resolves the storage directory owned by `user`.
///
/// Deterministic and collision-free: the decimal user id is the final
/// path component, so distinct users can never share a root.
pub fn user_root(storage_root: &Path, user: UserId) -> PathBuf {
    storage_root.join(user.0.to_string())
}

/// Creates the user root if absent. Idempotent.
pub fn ensure_user_root(storage_root: &Path, user: UserId) -> Result<PathBuf, StorageError> {
    let root = user_root(storage_root, user);
    if let Err(e) = fs::create_dir_all(&root) {
        error!("Failed to create user root {}: {}", root.display(), e);
        return Err(StorageError::StorageUnavailable(format!(
            "cannot create storage for user {}",
            user
        )));
    }
    Ok(root)
}
