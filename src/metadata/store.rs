//! Tag metadata store
//!
//! One JSON document per user root, mapping file name to its tag list.
//! Every update is a read-modify-write of the whole document; the last
//! writer for a given user wins.

use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::storage::paths::{UserId, ensure_user_root, user_root};
use crate::storage::validation::validate_entry_name;

/// Reserved file name of the per-user metadata document.
pub const METADATA_DOC: &str = ".metadata.json";

/// Tags recorded for a single file name.
///
/// The list is ordered as entered and may contain duplicates; every
/// tagging operation replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    pub tags: Vec<String>,
}

type TagDocument = BTreeMap<String, TagRecord>;

fn document_path(storage_root: &Path, user: UserId) -> PathBuf {
    user_root(storage_root, user).join(METADATA_DOC)
}

/// Reads the raw document, or `None` if it was never created.
fn read_document_bytes(path: &Path) -> Result<Option<Vec<u8>>, StorageError> {
    match fs::read(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => {
            error!("Failed to read metadata document {}: {}", path.display(), e);
            Err(StorageError::StorageUnavailable(
                "cannot read metadata document".into(),
            ))
        }
    }
}

fn parse_document(path: &Path, raw: &[u8]) -> Result<TagDocument, StorageError> {
    serde_json::from_slice(raw).map_err(|e| {
        error!("Corrupt metadata document {}: {}", path.display(), e);
        StorageError::StorageUnavailable("metadata document is corrupt".into())
    })
}

/// Serializes the document to a reserved temporary and renames it into
/// place, so readers never observe a half-written document.
fn write_document(path: &Path, document: &TagDocument) -> Result<(), StorageError> {
    let raw = serde_json::to_vec(document).map_err(|e| {
        error!("Failed to serialize metadata document {}: {}", path.display(), e);
        StorageError::StorageUnavailable("cannot serialize metadata document".into())
    })?;

    let temp_path = path.with_extension("json.tmp");
    if let Err(e) = fs::write(&temp_path, &raw) {
        error!("Failed to write {}: {}", temp_path.display(), e);
        let _ = fs::remove_file(&temp_path);
        return Err(StorageError::WriteFailure(e));
    }
    if let Err(e) = fs::rename(&temp_path, path) {
        error!(
            "Failed to move {} into place as {}: {}",
            temp_path.display(),
            path.display(),
            e
        );
        let _ = fs::remove_file(&temp_path);
        return Err(StorageError::WriteFailure(e));
    }
    Ok(())
}

/// Replaces the full tag list recorded for `file_name`.
///
/// Creates the user root and an empty document first if either is
/// absent. A corrupt existing document is reinitialized rather than
/// aborting the write.
pub fn set_tags(
    storage_root: &Path,
    user: UserId,
    file_name: &str,
    tags: &[String],
) -> Result<(), StorageError> {
    validate_entry_name(file_name)?;
    ensure_user_root(storage_root, user)?;

    let path = document_path(storage_root, user);
    let mut document = match read_document_bytes(&path)? {
        None => TagDocument::new(),
        Some(raw) => match parse_document(&path, &raw) {
            Ok(document) => document,
            Err(_) => {
                warn!(
                    "Reinitializing corrupt metadata document {}",
                    path.display()
                );
                TagDocument::new()
            }
        },
    };

    document.insert(
        file_name.to_string(),
        TagRecord {
            tags: tags.to_vec(),
        },
    );
    write_document(&path, &document)?;

    info!(
        "Recorded {} tags for {} (user {})",
        tags.len(),
        file_name,
        user
    );
    Ok(())
}

/// Returns the tag list recorded for `file_name`, in the order it was
/// entered. `NotFound` if the file was never tagged.
pub fn get_tags(
    storage_root: &Path,
    user: UserId,
    file_name: &str,
) -> Result<Vec<String>, StorageError> {
    validate_entry_name(file_name)?;

    let path = document_path(storage_root, user);
    let raw = match read_document_bytes(&path)? {
        Some(raw) => raw,
        None => return Err(StorageError::NotFound(file_name.into())),
    };
    let document = parse_document(&path, &raw)?;

    document
        .get(file_name)
        .map(|record| record.tags.clone())
        .ok_or_else(|| StorageError::NotFound(file_name.into()))
}
