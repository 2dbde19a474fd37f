//! Vocabulary loading.
//!
//! A vocabulary is plain text with one word per line. Surrounding whitespace
//! is insignificant and blank lines are skipped, so the trie is never fed an
//! empty word. Sources are read to completion before anything is inserted:
//! a failing source produces an error, never a partially-populated trie.

mod source;

use std::io::BufRead;
use std::time::Instant;

use tracing::{debug, info};

use crate::data_structures::PrefixTrie;
use crate::error::VocabularyError;

pub use source::{FileSource, InlineSource, VocabularySource};

#[cfg(test)]
pub use source::MockVocabularySource;

/// Result type for vocabulary operations.
pub type VocabularyResult<T> = Result<T, VocabularyError>;

/// Splits newline-delimited text into trimmed, non-empty words.
///
/// # Arguments
///
/// * `reader` - Buffered reader over the raw text.
/// * `source_name` - Name used in error messages.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The words in source order.
/// * `Err(VocabularyError)` - If reading fails or a line is not UTF-8.
pub fn parse_words<R: BufRead>(reader: R, source_name: &str) -> VocabularyResult<Vec<String>> {
    let mut words = Vec::new();

    for (index, line) in reader.split(b'\n').enumerate() {
        let bytes = line.map_err(|e| VocabularyError::Unavailable {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })?;

        let line = std::str::from_utf8(&bytes).map_err(|_| VocabularyError::InvalidEncoding {
            source_name: source_name.to_string(),
            line: index + 1,
        })?;

        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }

    Ok(words)
}

/// Builds a trie from every word a source yields.
///
/// # Arguments
///
/// * `source` - Where the words come from.
/// * `allow_empty` - Whether a source with no words is acceptable.
///
/// # Returns
///
/// * `Ok(PrefixTrie)` - The fully loaded trie.
/// * `Err(VocabularyError)` - If the source is unreadable, or empty while
///   `allow_empty` is false.
pub fn load_trie(source: &dyn VocabularySource, allow_empty: bool) -> VocabularyResult<PrefixTrie> {
    let started = Instant::now();
    let source_name = source.name();

    let words = source.read_words()?;
    if words.is_empty() && !allow_empty {
        return Err(VocabularyError::Empty { source_name });
    }

    let read = words.len();
    let trie: PrefixTrie = words.into_iter().collect();

    if trie.len() < read {
        debug!(
            source = %source_name,
            duplicates = read - trie.len(),
            "Duplicate words collapsed"
        );
    }
    info!(
        source = %source_name,
        words = trie.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Vocabulary loaded"
    );

    Ok(trie)
}
