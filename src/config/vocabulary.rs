//! Vocabulary configuration module.
//!
//! Where the word list lives and whether an empty list is acceptable.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::vocabulary::FileSource;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default vocabulary file, relative to the working directory.
pub const DEFAULT_VOCABULARY_PATH: &str = "data.txt";

/// Vocabulary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Path to the newline-delimited word list
    pub path: PathBuf,

    /// Whether a vocabulary with no words is accepted instead of failing
    pub allow_empty: bool,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_VOCABULARY_PATH),
            allow_empty: false,
        }
    }
}

impl VocabularyConfig {
    /// File source for the configured path.
    pub fn source(&self) -> FileSource {
        FileSource::new(&self.path)
    }
}

impl Validate for VocabularyConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "vocabulary.path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
