//! Coarse content classification for files.

use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Display mode the site renderer uses for a file.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ContentType {
    Md,
    Csv,
    Svg,
    Html,
    Css,
    Js,
    Text,
}

impl ContentType {
    /// Classify a file by the extension of its name.
    ///
    /// Matching is case-insensitive; a missing or unknown extension is `Text`.
    /// Dotfiles such as `.md` have no extension.
    pub fn from_file_name(name: &str) -> Self {
        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .unwrap_or(ContentType::Text)
    }

    /// Tag written to the `type` field.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}
