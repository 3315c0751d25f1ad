//! Directory tree builder for sitetree.
//!
//! This crate walks a source directory and turns it into the labeled node
//! tree a static site renders, then emits that tree as a JavaScript module.
//!
//! # Overview
//!
//! - **Deterministic order**: siblings are sorted by name, byte-wise
//! - **Pruning**: folders with no files anywhere below them are dropped
//! - **Readme first**: the top-level `README.md` is moved to index 0
//! - **Tolerant reads**: an unreadable file keeps its node, with an error
//!   sentinel as content; only directory listing failures abort
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use sitetree_build::{BuildConfig, TreeBuilder, render_module};
//!
//! let config = BuildConfig::new("content");
//! let tree = TreeBuilder::new(config.clone()).build().unwrap();
//! let module = render_module(&tree, &config.const_name, Utc::now()).unwrap();
//!
//! println!("{module}");
//! ```

mod builder;
mod emit;

pub use builder::{TreeBuilder, build_tree};
pub use emit::{GENERATED_HEADER, render_module, write_module};

// Re-export core types for convenience
pub use sitetree_core::{
    BuildConfig, BuildError, BuildSummary, ContentType, Node, NodeId, NodeKind, SiteTree, Walk,
};
