//! Storage tree rendering
//!
//! Builds a typed view of a user's storage tree and renders it as
//! indented lines for display.

pub mod node;
pub mod render;

pub use node::{Node, scan_user_tree};
pub use render::{TreeLines, render};
