//! Data structures for prefix suggestion.
//!
//! This module contains the in-memory structures used to answer
//! autocomplete queries. All implementations adhere to the project rules:
//! - No unsafe code
//! - Read-only queries after the load phase
//! - Bounded work per query

pub mod prefix_trie;

// Re-export common data structures
pub use prefix_trie::{Completions, PrefixTrie, DEFAULT_SUGGESTION_LIMIT};
