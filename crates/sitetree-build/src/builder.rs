//! Recursive directory-to-tree conversion.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, warn};

use sitetree_core::{BuildConfig, BuildError, Node, SiteTree, read_error_sentinel};

/// Builds a [`SiteTree`] from a source directory.
///
/// The walk is depth-first and synchronous. Siblings are ordered by name,
/// ignored names are skipped at every level and folders left without any
/// file are pruned.
pub struct TreeBuilder {
    config: BuildConfig,
}

impl TreeBuilder {
    /// Create a builder for a configuration.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Configuration this builder walks with.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Walk the configured root and pin the readme to the front.
    pub fn build(&self) -> Result<SiteTree, BuildError> {
        let start = Instant::now();
        info!(root = %self.config.root.display(), "Building content tree");

        let mut tree = SiteTree::new(self.build_tree(&self.config.root)?);
        tree.pin_to_front(&self.config.readme);

        let summary = tree.summary();
        info!(
            folders = summary.folders,
            files = summary.files,
            unreadable = summary.unreadable,
            bytes = summary.content_bytes,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Built content tree"
        );
        Ok(tree)
    }

    /// Convert a directory into its ordered forest of nodes.
    ///
    /// Paths in the result are relative to `dir`. No reordering beyond the
    /// name sort is applied.
    pub fn build_tree(&self, dir: &Path) -> Result<Vec<Node>, BuildError> {
        let mut ancestors = Vec::new();
        self.build_dir(dir, "", &mut ancestors)
    }

    /// Recursively build the nodes of one directory level.
    fn build_dir(
        &self,
        dir: &Path,
        rel: &str,
        ancestors: &mut Vec<PathBuf>,
    ) -> Result<Vec<Node>, BuildError> {
        let entries = self.list_entries(dir)?;
        debug!(path = %dir.display(), entries = entries.len(), "Listed directory");

        // Symlinked directories can point back up the chain.
        let canonical = dir.canonicalize().ok();
        if let Some(ref canonical) = canonical {
            if ancestors.contains(canonical) {
                warn!(path = %dir.display(), "Skipping directory cycle");
                return Ok(Vec::new());
            }
            ancestors.push(canonical.clone());
        }

        let mut nodes = Vec::with_capacity(entries.len());
        for entry in entries {
            let rel_path = if rel.is_empty() {
                entry.name.clone()
            } else {
                format!("{rel}/{}", entry.name)
            };

            if is_dir(&entry.path) {
                let children = self.build_dir(&entry.path, &rel_path, ancestors)?;
                if children.is_empty() {
                    debug!(path = %rel_path, "Pruning empty folder");
                    continue;
                }
                nodes.push(Node::folder(&entry.name, &rel_path, children));
            } else {
                let content = read_file(&entry.path);
                nodes.push(Node::file(&entry.name, &rel_path, content));
            }
        }

        if canonical.is_some() {
            ancestors.pop();
        }

        Ok(nodes)
    }

    /// List, filter and sort the entries of a directory.
    fn list_entries(&self, dir: &Path) -> Result<Vec<Entry>, BuildError> {
        let read_dir = fs::read_dir(dir).map_err(|e| BuildError::directory_read(dir, e))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| BuildError::directory_read(dir, e))?;
            let name = entry_name(dir, &entry.file_name());
            if self.config.should_ignore(&name) {
                continue;
            }
            entries.push(Entry {
                name,
                path: entry.path(),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

/// Walk `dir` with the fixed ignore set, without moving any node.
pub fn build_tree(dir: impl AsRef<Path>) -> Result<Vec<Node>, BuildError> {
    let dir = dir.as_ref();
    TreeBuilder::new(BuildConfig::new(dir)).build_tree(dir)
}

/// A listed directory entry.
struct Entry {
    name: String,
    path: PathBuf,
}

/// Follows symlinks; anything that cannot be stat'ed is treated as a file.
fn is_dir(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|metadata| metadata.is_dir())
}

/// Entry name as text; invalid UTF-8 is replaced with U+FFFD.
fn entry_name(dir: &Path, name: &OsStr) -> String {
    match name.to_str() {
        Some(name) => name.to_owned(),
        None => {
            let lossy = name.to_string_lossy().into_owned();
            warn!(
                dir = %dir.display(),
                name = %lossy,
                "Entry name is not valid UTF-8, id may collide with a sibling"
            );
            lossy
        }
    }
}

/// Read a file as text, substituting the error sentinel when the read fails.
///
/// Invalid UTF-8 is not a failure: bad sequences decode to U+FFFD.
fn read_file(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Failed to read file");
            read_error_sentinel(&err)
        }
    }
}
