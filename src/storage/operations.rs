//! Blob store operations
//!
//! Handles file persistence for chat events: store, read, list and
//! usage accounting over a user root.

use log::{error, info};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use walkdir::WalkDir;

use crate::error::StorageError;
use crate::storage::paths::{UserId, ensure_user_root, user_root};
use crate::storage::results::UsageSnapshot;
use crate::storage::validation::{is_reserved_name, validate_entry_name};

/// Stores `content` under `name` in the user's root, overwriting any
/// existing blob of the same name. Returns the number of bytes written.
///
/// Writes go to a reserved temporary first and are renamed into place,
/// so a failed write never leaves a partial blob under the final name.
/// Existing tags for `name` are untouched.
pub fn store_file(
    storage_root: &Path,
    user: UserId,
    name: &str,
    content: &[u8],
) -> Result<u64, StorageError> {
    validate_entry_name(name)?;
    let root = ensure_user_root(storage_root, user)?;

    let final_path = root.join(name);
    let temp_path = root.join(format!(".{name}.tmp"));

    let mut temp_file = match File::create(&temp_path) {
        Ok(file) => file,
        Err(e) => {
            error!("Failed to create temporary file {}: {}", temp_path.display(), e);
            return Err(StorageError::WriteFailure(e));
        }
    };

    if let Err(e) = temp_file.write_all(content).and_then(|_| temp_file.flush()) {
        error!("Failed to write {} for user {}: {}", name, user, e);
        let _ = fs::remove_file(&temp_path);
        return Err(StorageError::WriteFailure(e));
    }
    drop(temp_file);

    if let Err(e) = fs::rename(&temp_path, &final_path) {
        error!(
            "Failed to move {} into place as {}: {}",
            temp_path.display(),
            final_path.display(),
            e
        );
        let _ = fs::remove_file(&temp_path);
        return Err(StorageError::WriteFailure(e));
    }

    info!("Stored {} for user {} ({} bytes)", name, user, content.len());
    Ok(content.len() as u64)
}

/// Reads the blob stored under `name` in the user's root.
pub fn read_file(storage_root: &Path, user: UserId, name: &str) -> Result<Vec<u8>, StorageError> {
    validate_entry_name(name)?;
    let path = user_root(storage_root, user).join(name);

    if !path.is_file() {
        return Err(StorageError::NotFound(name.into()));
    }

    match fs::read(&path) {
        Ok(content) => {
            info!("Read {} for user {} ({} bytes)", name, user, content.len());
            Ok(content)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StorageError::NotFound(name.into())),
        Err(e) => {
            error!("Failed to read {} for user {}: {}", name, user, e);
            Err(StorageError::StorageUnavailable(format!("cannot read {}", name)))
        }
    }
}

/// Lists the direct entries of the user's root, excluding internal
/// artifacts. Order is filesystem order; callers must not assume sorting.
pub fn list_files(storage_root: &Path, user: UserId) -> Result<Vec<String>, StorageError> {
    let root = user_root(storage_root, user);
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&root).map_err(|e| {
        error!("Failed to list user root {}: {}", root.display(), e);
        StorageError::StorageUnavailable(format!("cannot list storage for user {}", user))
    })?;

    let mut names = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        if !is_reserved_name(&name) {
            names.push(name);
        }
    }

    info!("Listed {} entries for user {}", names.len(), user);
    Ok(names)
}

/// Walks the user's root and sums size and count of all stored files at
/// any depth. Internal artifacts and anything beneath a reserved
/// directory are excluded.
pub fn storage_usage(storage_root: &Path, user: UserId) -> Result<UsageSnapshot, StorageError> {
    let root = user_root(storage_root, user);
    if !root.is_dir() {
        return Ok(UsageSnapshot::empty());
    }

    let mut snapshot = UsageSnapshot::empty();
    let walker = WalkDir::new(&root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| !is_reserved_name(&e.file_name().to_string_lossy()));

    for entry in walker {
        let entry = entry.map_err(|e| {
            error!("Failed to walk user root {}: {}", root.display(), e);
            StorageError::StorageUnavailable(format!("cannot walk storage for user {}", user))
        })?;

        if entry.file_type().is_file() {
            let metadata = entry.metadata().map_err(|e| {
                error!("Failed to stat {}: {}", entry.path().display(), e);
                StorageError::StorageUnavailable(format!("cannot walk storage for user {}", user))
            })?;
            snapshot.total_bytes += metadata.len();
            snapshot.file_count += 1;
        }
    }

    Ok(snapshot)
}
