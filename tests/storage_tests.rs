use std::fs;

use file_manager_bot::error::StorageError;
use file_manager_bot::metadata;
use file_manager_bot::storage::{self, UserId};
use tempfile::TempDir;

// Fresh storage root per test; dropped (and deleted) at test end.
fn scratch_root() -> TempDir {
    tempfile::tempdir().expect("failed to create scratch storage root")
}

#[test]
fn test_store_then_read_roundtrip() {
    let root = scratch_root();
    let user = UserId(42);
    let content = b"not really a pdf";

    let bytes = storage::store_file(root.path(), user, "report.pdf", content).unwrap();
    assert_eq!(bytes, content.len() as u64);

    let read_back = storage::read_file(root.path(), user, "report.pdf").unwrap();
    assert_eq!(read_back, content);
}

#[test]
fn test_store_overwrites_same_name() {
    let root = scratch_root();
    let user = UserId(1);

    storage::store_file(root.path(), user, "notes.txt", b"first version").unwrap();
    storage::store_file(root.path(), user, "notes.txt", b"second").unwrap();

    let read_back = storage::read_file(root.path(), user, "notes.txt").unwrap();
    assert_eq!(read_back, b"second");

    let listing = storage::list_files(root.path(), user).unwrap();
    assert_eq!(listing, vec!["notes.txt"]);
}

#[test]
fn test_store_leaves_no_temporary_behind() {
    let root = scratch_root();
    let user = UserId(1);

    storage::store_file(root.path(), user, "data.bin", &[0u8; 64]).unwrap();

    let user_dir = root.path().join("1");
    let entries: Vec<String> = fs::read_dir(&user_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(entries, vec!["data.bin"]);
}

#[test]
fn test_read_missing_file_is_not_found() {
    let root = scratch_root();
    let user = UserId(7);

    let err = storage::read_file(root.path(), user, "nope.txt").unwrap_err();
    assert!(matches!(err, StorageError::NotFound(_)));
}

#[test]
fn test_unknown_user_has_empty_listing_and_usage() {
    let root = scratch_root();
    let user = UserId(999);

    assert!(storage::list_files(root.path(), user).unwrap().is_empty());

    let usage = storage::storage_usage(root.path(), user).unwrap();
    assert_eq!(usage.total_bytes, 0);
    assert_eq!(usage.file_count, 0);
}

#[test]
fn test_listing_excludes_metadata_document() {
    let root = scratch_root();
    let user = UserId(42);

    storage::store_file(root.path(), user, "a.txt", b"a").unwrap();
    storage::store_file(root.path(), user, "b.txt", b"b").unwrap();
    metadata::set_tags(root.path(), user, "a.txt", &["keep".to_string()]).unwrap();

    let mut listing = storage::list_files(root.path(), user).unwrap();
    listing.sort();
    assert_eq!(listing, vec!["a.txt", "b.txt"]);
}

#[test]
fn test_usage_excludes_metadata_and_counts_nested_files() {
    let root = scratch_root();
    let user = UserId(42);

    storage::store_file(root.path(), user, "report.pdf", &[1u8; 1000]).unwrap();
    metadata::set_tags(root.path(), user, "report.pdf", &["urgent".to_string()]).unwrap();

    // Nested content placed out of band; uploads only ever land at the top
    // level but usage walks the whole root.
    let nested = root.path().join("42").join("archive");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("old.txt"), [2u8; 50]).unwrap();

    let usage = storage::storage_usage(root.path(), user).unwrap();
    assert_eq!(usage.total_bytes, 1050);
    assert_eq!(usage.file_count, 2);
}

#[test]
fn test_traversal_names_rejected_without_touching_disk() {
    let root = scratch_root();
    let user = UserId(5);

    for name in ["../escape.txt", "dir/inner.txt", "dir\\inner.txt", "a..b"] {
        let err = storage::store_file(root.path(), user, name, b"x").unwrap_err();
        assert!(matches!(err, StorageError::PathTraversal(_)), "{name}");

        let err = storage::read_file(root.path(), user, name).unwrap_err();
        assert!(matches!(err, StorageError::PathTraversal(_)), "{name}");
    }

    // Nothing escaped into the storage root or created a user root.
    assert!(!root.path().join("escape.txt").exists());
    assert!(!root.path().join("5").exists());
}

#[test]
fn test_reserved_names_rejected_for_upload_and_download() {
    let root = scratch_root();
    let user = UserId(5);

    let err = storage::store_file(root.path(), user, ".metadata.json", b"{}").unwrap_err();
    assert!(matches!(err, StorageError::InvalidTarget(_)));

    let err = storage::read_file(root.path(), user, ".metadata.json").unwrap_err();
    assert!(matches!(err, StorageError::InvalidTarget(_)));
}

#[test]
fn test_users_are_isolated() {
    let root = scratch_root();

    storage::store_file(root.path(), UserId(1), "mine.txt", b"one").unwrap();
    storage::store_file(root.path(), UserId(2), "yours.txt", b"two").unwrap();

    assert_eq!(
        storage::list_files(root.path(), UserId(1)).unwrap(),
        vec!["mine.txt"]
    );
    assert_eq!(
        storage::list_files(root.path(), UserId(2)).unwrap(),
        vec!["yours.txt"]
    );

    let err = storage::read_file(root.path(), UserId(2), "mine.txt").unwrap_err();
    assert!(matches!(err, StorageError::NotFound(_)));
}
