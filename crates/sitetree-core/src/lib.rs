//! Core types for sitetree.
//!
//! This crate provides the data structures shared by the tree builder and
//! the command line tool: labeled nodes, the content-type table, the static
//! label tables, build configuration and errors.

mod config;
mod content_type;
mod error;
pub mod labels;
mod node;
mod tree;

pub use config::{
    BuildConfig, BuildConfigBuilder, DEFAULT_CONST_NAME, DEFAULT_README, IGNORED_NAMES,
};
pub use content_type::ContentType;
pub use error::{BuildError, READ_ERROR_PREFIX, read_error_sentinel};
pub use node::{Node, NodeId, NodeKind, Walk};
pub use tree::{BuildSummary, SiteTree};
