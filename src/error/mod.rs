//! Error handling
//!
//! Defines error types and user-facing error mapping.

pub mod handlers;
pub mod types;

pub use types::*;
