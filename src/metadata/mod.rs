//! Tag metadata
//!
//! Persists per-file tag lists alongside the blobs they describe.

pub mod store;

pub use store::{METADATA_DOC, TagRecord, get_tags, set_tags};
