//! Conversation gateway boundary
//!
//! Protocol-agnostic events and replies plus the dispatcher a chat
//! transport drives. The transport itself (polling, callbacks,
//! keyboards) lives outside this crate.

pub mod dispatcher;
pub mod events;
pub mod results;

pub use dispatcher::{Dispatcher, tokenize_tags};
pub use events::ChatEvent;
pub use results::Reply;
