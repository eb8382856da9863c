//! Run configuration.
//!
//! Every setting has a default, so running without a configuration file
//! converts `bib.bib` into `out/` with plain references. A TOML file can
//! override any of them:
//!
//! ```toml
//! input = "publications.bib"
//! output_dir = "_publications"
//!
//! [format]
//! policy = "author-prefixed"
//! short_authors = { max_full = 10, et_al_count = 3 }
//! long_authors = { max_full = 99, et_al_count = 4 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::document::FormatOptions;

/// Errors that can occur when loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Everything a run needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// BibTeX file to read
    pub input: PathBuf,
    /// Existing directory the pages are written to
    pub output_dir: PathBuf,
    pub format: FormatOptions,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from("bib.bib"),
            output_dir: PathBuf::from("out"),
            format: FormatOptions::default(),
        }
    }
}

impl Config {
    /// Loads a configuration file; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
