//! Gateway result types
//!
//! Structured outcomes of chat events, for the transport to render.
//! No wording or markup lives here apart from rejection text.

use crate::storage::UsageSnapshot;

/// Outcome of one chat event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Upload accepted and persisted.
    Uploaded { name: String, bytes: u64 },
    /// Names of the user's stored files, unsorted.
    Listing(Vec<String>),
    /// File content to transmit back to the user.
    Document { name: String, content: Vec<u8> },
    /// Tags now recorded for the file, replacing any prior list.
    TagsSaved { name: String, tags: Vec<String> },
    /// Usage summary plus the advertised (unenforced) quota.
    Panel {
        usage: UsageSnapshot,
        quota_bytes: u64,
    },
    /// The operation was refused; text is ready for display.
    Rejected(String),
}
