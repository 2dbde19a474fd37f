//! Suggestion configuration module.
//!
//! Bounds applied to suggestion queries coming from the command line.

use super::{ConfigResult, Validate};
use crate::data_structures::DEFAULT_SUGGESTION_LIMIT;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Suggestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Number of suggestions when the caller gives no limit
    pub default_limit: usize,

    /// Upper bound applied to any requested limit
    pub max_limit: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_SUGGESTION_LIMIT,
            max_limit: 100,
        }
    }
}

impl SuggestionConfig {
    /// Turns an optional, possibly negative, requested limit into the bound
    /// passed to the trie.
    ///
    /// Missing limits fall back to `default_limit`, negative limits become
    /// zero (an empty result), and anything above `max_limit` is clamped.
    pub fn effective_limit(&self, requested: Option<i64>) -> usize {
        match requested {
            None => self.default_limit,
            Some(limit) => usize::try_from(limit).unwrap_or(0).min(self.max_limit),
        }
    }
}

impl Validate for SuggestionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.default_limit == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "suggestion.default_limit".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.max_limit < self.default_limit {
            return Err(ConfigError::ValueOutOfRange {
                key: "suggestion.max_limit".to_string(),
                message: format!("must be at least default_limit ({})", self.default_limit),
            });
        }

        Ok(())
    }
}
