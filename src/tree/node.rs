//! Storage tree model
//!
//! Explicit recursive node type for a user's storage tree, built
//! depth-first from the filesystem.

use log::error;
use std::fs;
use std::path::Path;

use crate::error::StorageError;
use crate::storage::paths::{UserId, user_root};
use crate::storage::validation::is_reserved_name;

/// One entry in a user's storage tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A stored file.
    Leaf(String),
    /// A directory and its entries.
    Directory(String, Vec<Node>),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Leaf(name) => name,
            Node::Directory(name, _) => name,
        }
    }
}

/// Scans the storage tree of `user`, skipping reserved names at any
/// depth. A user with no storage yet gets an empty tree.
pub fn scan_user_tree(storage_root: &Path, user: UserId) -> Result<Vec<Node>, StorageError> {
    let root = user_root(storage_root, user);
    if !root.is_dir() {
        return Ok(Vec::new());
    }
    scan_directory(&root)
}

fn scan_directory(dir: &Path) -> Result<Vec<Node>, StorageError> {
    let entries = fs::read_dir(dir).map_err(|e| {
        error!("Failed to scan directory {}: {}", dir.display(), e);
        StorageError::StorageUnavailable(format!("cannot scan {}", dir.display()))
    })?;

    let mut nodes = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        if is_reserved_name(&name) {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            nodes.push(Node::Directory(name, scan_directory(&path)?));
        } else {
            nodes.push(Node::Leaf(name));
        }
    }
    Ok(nodes)
}
