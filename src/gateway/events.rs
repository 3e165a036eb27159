//! Chat events
//!
//! The inputs the storage core consumes, already stripped of transport
//! detail. The chat transport builds these from whatever protocol it
//! speaks.

/// A single conversational request from one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// A document arrived for storage.
    Upload { name: String, content: Vec<u8> },
    /// The user asked for their file listing.
    ListFiles,
    /// The user picked a file to download.
    RequestDownload { name: String },
    /// The user entered tags for a file, still as raw text.
    TagRequest { name: String, tags_text: String },
    /// The user opened their usage panel.
    PanelRequest,
}
