//! Vocabulary error module.
//!
//! Failures of the vocabulary loader. Any of these aborts loading as a
//! whole; a trie is never handed out partially populated.

use thiserror::Error;

/// Errors that can occur while reading a vocabulary source.
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// The source could not be opened or read.
    #[error("Vocabulary unavailable from {source_name}: {reason}")]
    Unavailable {
        /// Human-readable name of the source (usually a path)
        source_name: String,
        /// Underlying cause
        reason: String,
    },

    /// A line was not valid UTF-8.
    #[error("Vocabulary {source_name} has invalid UTF-8 on line {line}")]
    InvalidEncoding {
        /// Human-readable name of the source
        source_name: String,
        /// 1-based line number
        line: usize,
    },

    /// The source produced no usable words.
    #[error("Vocabulary {source_name} contains no words")]
    Empty {
        /// Human-readable name of the source
        source_name: String,
    },
}
