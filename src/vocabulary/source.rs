//! Vocabulary sources.
//!
//! The trie does not care where words come from; a source only has to
//! produce the whole list once, at startup.

use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::{Path, PathBuf};

use super::{parse_words, VocabularyResult};
use crate::error::VocabularyError;

/// A provider of vocabulary words.
#[cfg_attr(test, mockall::automock)]
pub trait VocabularySource {
    /// Name used in logs and error messages.
    fn name(&self) -> String;

    /// Reads every word, trimmed and non-empty, in source order.
    fn read_words(&self) -> VocabularyResult<Vec<String>>;
}

/// Newline-delimited word list on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading from `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VocabularySource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read_words(&self) -> VocabularyResult<Vec<String>> {
        let file = File::open(&self.path).map_err(|e| VocabularyError::Unavailable {
            source_name: self.name(),
            reason: e.to_string(),
        })?;

        parse_words(BufReader::new(file), &self.name())
    }
}

/// Word list held in memory, e.g. embedded with `include_str!`.
#[derive(Debug, Clone)]
pub struct InlineSource {
    name: String,
    text: String,
}

impl InlineSource {
    /// Creates a source over `text`, reported as `name`.
    pub fn new<N: Into<String>, T: Into<String>>(name: N, text: T) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl VocabularySource for InlineSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn read_words(&self) -> VocabularyResult<Vec<String>> {
        parse_words(Cursor::new(self.text.as_bytes()), &self.name)
    }
}
