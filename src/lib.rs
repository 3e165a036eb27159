//! File Manager Bot - storage core
//!
//! Per-user blob storage, tag metadata and tree rendering behind a
//! protocol-agnostic conversation gateway boundary. The chat transport
//! drives the [`gateway::Dispatcher`] and renders its replies.

pub mod config;
pub mod error;
pub mod gateway;
pub mod metadata;
pub mod storage;
pub mod tree;

pub use config::BotConfig;
pub use gateway::{ChatEvent, Dispatcher, Reply};
pub use storage::UserId;
