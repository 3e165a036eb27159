//! Event dispatch
//!
//! Routes chat events to the storage and metadata layers and shapes
//! structured replies. Each event is handled to completion before the
//! transport hands over the next one for a session; there is no
//! coordination between events racing on the same user root.

use std::path::PathBuf;

use crate::config::BotConfig;
use crate::error::StorageError;
use crate::error::handlers::{error_to_reply, handle_error};
use crate::gateway::events::ChatEvent;
use crate::gateway::results::Reply;
use crate::metadata;
use crate::storage::{self, UserId};
use crate::tree::{self, TreeLines};

/// Routes chat events for all users against one storage root.
pub struct Dispatcher {
    storage_root: PathBuf,
    quota_bytes: u64,
}

impl Dispatcher {
    pub fn new(config: &BotConfig) -> Self {
        Self {
            storage_root: config.storage_root_path(),
            quota_bytes: config.quota_bytes(),
        }
    }

    /// Handles one event to completion. Failures become
    /// `Reply::Rejected`; nothing here ends the conversational session.
    pub fn handle_event(&self, user: UserId, event: ChatEvent) -> Reply {
        let result = match event {
            ChatEvent::Upload { name, content } => self.on_upload(user, &name, &content),
            ChatEvent::ListFiles => self.on_list_files(user),
            ChatEvent::RequestDownload { name } => self.on_request_download(user, &name),
            ChatEvent::TagRequest { name, tags_text } => {
                self.on_tag_request(user, &name, &tags_text)
            }
            ChatEvent::PanelRequest => self.on_panel_request(user),
        };

        result.unwrap_or_else(|e| {
            handle_error(&e);
            Reply::Rejected(error_to_reply(&e))
        })
    }

    fn on_upload(&self, user: UserId, name: &str, content: &[u8]) -> Result<Reply, StorageError> {
        let bytes = storage::store_file(&self.storage_root, user, name, content)?;
        Ok(Reply::Uploaded {
            name: name.to_string(),
            bytes,
        })
    }

    fn on_list_files(&self, user: UserId) -> Result<Reply, StorageError> {
        let files = storage::list_files(&self.storage_root, user)?;
        Ok(Reply::Listing(files))
    }

    fn on_request_download(&self, user: UserId, name: &str) -> Result<Reply, StorageError> {
        let content = storage::read_file(&self.storage_root, user, name)?;
        Ok(Reply::Document {
            name: name.to_string(),
            content,
        })
    }

    fn on_tag_request(
        &self,
        user: UserId,
        name: &str,
        tags_text: &str,
    ) -> Result<Reply, StorageError> {
        let tags = tokenize_tags(tags_text);
        metadata::set_tags(&self.storage_root, user, name, &tags)?;
        Ok(Reply::TagsSaved {
            name: name.to_string(),
            tags,
        })
    }

    fn on_panel_request(&self, user: UserId) -> Result<Reply, StorageError> {
        let usage = storage::storage_usage(&self.storage_root, user)?;
        Ok(Reply::Panel {
            usage,
            quota_bytes: self.quota_bytes,
        })
    }

    /// Recorded tags for one file, for transports that show tag detail.
    pub fn user_tags(&self, user: UserId, name: &str) -> Result<Vec<String>, StorageError> {
        metadata::get_tags(&self.storage_root, user, name)
    }

    /// Nested view of the user's storage, one indented line per entry.
    /// The returned stream is consumed once.
    pub fn user_tree(&self, user: UserId) -> Result<TreeLines, StorageError> {
        let nodes = tree::scan_user_tree(&self.storage_root, user)?;
        Ok(tree::render(nodes))
    }
}

/// Splits raw tag input on whitespace. Order is preserved and duplicate
/// tags are kept as entered.
pub fn tokenize_tags(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
