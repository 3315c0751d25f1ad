//! Rendering the tree as a JavaScript content module.

use std::fs;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use sitetree_core::{BuildError, SiteTree};

/// First line of every generated module.
pub const GENERATED_HEADER: &str = "// Auto-generated by sitetree — do not edit directly";

/// Render the module text binding `const_name` to the tree.
///
/// The JSON is pretty-printed with two-space indentation, so two renders of
/// the same tree differ only in the timestamp line.
pub fn render_module(
    tree: &SiteTree,
    const_name: &str,
    generated_at: DateTime<Utc>,
) -> Result<String, BuildError> {
    let json = serde_json::to_string_pretty(tree)?;
    let timestamp = generated_at.to_rfc3339_opts(SecondsFormat::Millis, true);
    Ok(format!(
        "{GENERATED_HEADER}\n// Generated: {timestamp}\nconst {const_name} = {json};\n"
    ))
}

/// Write a rendered module, returning the number of bytes written.
pub fn write_module(path: &Path, module: &str) -> Result<u64, BuildError> {
    fs::write(path, module).map_err(|e| BuildError::write(path, e))?;
    debug!(path = %path.display(), bytes = module.len(), "Wrote content module");
    Ok(module.len() as u64)
}
