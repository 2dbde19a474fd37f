//! Prefix Suggest Library
//!
//! Prefix-based autocomplete over a fixed vocabulary. Words are loaded once
//! into a case-insensitive prefix tree, after which any prefix resolves to a
//! bounded, alphabetically ordered list of matching words.
//!
//! # Architecture
//!
//! - [`data_structures::PrefixTrie`] is the core and depends on nothing else
//! - [`vocabulary`] reads newline-delimited word lists into a trie
//! - [`config`] and [`error`] carry the layered settings and error types used
//!   by the command-line front end
//!
//! ```
//! use prefix_suggest_lib::vocabulary::{load_trie, InlineSource};
//!
//! let source = InlineSource::new("fruit", "Apple\napricot\n\nbanana\n");
//! let trie = load_trie(&source, false).unwrap();
//!
//! assert_eq!(trie.suggest("AP", 3), vec!["Apple", "apricot"]);
//! ```

pub mod config;
pub mod data_structures;
pub mod error;
pub mod vocabulary;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::PrefixTrie;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
