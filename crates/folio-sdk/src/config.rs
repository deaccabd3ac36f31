use std::path::{Path, PathBuf};

use folio_diff::DiffOptions;
use serde::{Deserialize, Serialize};

use crate::error::{SdkError, SdkResult};

/// Upper bounds on what a comparison may be asked to align.
///
/// Block and word alignment are quadratic in the input sizes, so oversized
/// versions are refused before the diff engine runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffLimits {
    /// Maximum number of top-level blocks in either version.
    pub max_blocks: usize,
    /// Maximum number of words in any single block.
    pub max_words_per_block: usize,
}

impl Default for DiffLimits {
    fn default() -> Self {
        Self {
            max_blocks: 1_000,
            max_words_per_block: 5_000,
        }
    }
}

impl DiffLimits {
    /// No limits at all.
    pub fn unbounded() -> Self {
        Self {
            max_blocks: usize::MAX,
            max_words_per_block: usize::MAX,
        }
    }
}

/// Configuration for a [`Folio`](crate::Folio) instance.
///
/// Loaded from TOML; every key is optional:
///
/// ```toml
/// archive = "content/versions.json"
///
/// [diff]
/// compare_words = true
/// ignore_whitespace = false
///
/// [limits]
/// max_blocks = 1000
/// max_words_per_block = 5000
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// JSON archive of article versions.
    pub archive: Option<PathBuf>,
    /// Default comparison options.
    pub diff: DiffOptions,
    pub limits: DiffLimits,
}

impl FolioConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> SdkResult<Self> {
        toml::from_str(s).map_err(|e| SdkError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    ///
    /// A relative `archive` path is resolved against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> SdkResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| SdkError::Config(format!("{}: {e}", path.display())))?;
        let mut config = Self::from_toml_str(&text)?;
        if let (Some(archive), Some(dir)) = (&config.archive, path.parent()) {
            if archive.is_relative() {
                config.archive = Some(dir.join(archive));
            }
        }
        Ok(config)
    }

    pub fn with_archive(mut self, archive: impl Into<PathBuf>) -> Self {
        self.archive = Some(archive.into());
        self
    }
}
