//! Build configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Entry names skipped at every directory level.
pub const IGNORED_NAMES: &[&str] = &[".DS_Store", ".git", "node_modules"];

/// Top-level entry moved to the front of the tree.
pub const DEFAULT_README: &str = "README.md";

/// Name of the constant bound in the generated module.
pub const DEFAULT_CONST_NAME: &str = "SITE_CONTENT";

/// Configuration for a tree build.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct BuildConfig {
    /// Source directory to walk.
    pub root: PathBuf,

    /// Entry names to skip (exact match, not globs).
    #[builder(default = "default_ignore()")]
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,

    /// Top-level entry name pinned to index 0.
    #[builder(default = "default_readme()")]
    #[serde(default = "default_readme")]
    pub readme: String,

    /// Constant name used by the generated module.
    #[builder(default = "default_const_name()")]
    #[serde(default = "default_const_name")]
    pub const_name: String,
}

fn default_ignore() -> Vec<String> {
    IGNORED_NAMES.iter().map(|name| name.to_string()).collect()
}

fn default_readme() -> String {
    DEFAULT_README.to_string()
}

fn default_const_name() -> String {
    DEFAULT_CONST_NAME.to_string()
}

impl BuildConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.root {
            Some(ref root) if root.as_os_str().is_empty() => {
                Err("Root path cannot be empty".to_string())
            }
            Some(_) => Ok(()),
            None => Err("Root path is required".to_string()),
        }
    }
}

impl BuildConfig {
    /// Create a new build config builder.
    pub fn builder() -> BuildConfigBuilder {
        BuildConfigBuilder::default()
    }

    /// Create a config for building from a path with the fixed defaults.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignore: default_ignore(),
            readme: default_readme(),
            const_name: default_const_name(),
        }
    }

    /// Check whether an entry name is excluded from the tree.
    pub fn should_ignore(&self, name: &str) -> bool {
        self.ignore.iter().any(|ignored| ignored == name)
    }
}
