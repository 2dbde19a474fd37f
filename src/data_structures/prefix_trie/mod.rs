// Copyright (c) 2025 Prefix Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Trie Implementation
//!
//! This module provides the character-keyed prefix tree behind autocomplete.
//! Matching is case-insensitive, output keeps the spelling that was inserted,
//! and suggestions come back in alphabetical order with a hard bound on how
//! many are produced.
//!
//! # Example
//!
//! ```
//! use prefix_suggest_lib::data_structures::prefix_trie::PrefixTrie;
//!
//! let trie: PrefixTrie = ["cat", "car", "Cap"].into_iter().collect();
//!
//! assert_eq!(trie.suggest("CA", 3), vec!["Cap", "car", "cat"]);
//! assert_eq!(trie.suggest("ca", 1), vec!["Cap"]);
//! assert!(trie.suggest("dog", 3).is_empty());
//! ```

mod node;

#[cfg(test)]
mod tests;

use node::TrieNode;

/// Number of suggestions returned when the caller does not ask for a limit.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Folds a word or prefix into the form used for keying.
///
/// Uses the locale-independent Unicode lowercase mapping so that insertion
/// and lookup always agree on the path.
fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// A prefix tree of vocabulary words supporting bounded suggestion queries.
///
/// Key features:
/// * Case-insensitive matching with case-preserving output
/// * O(prefix length) descent to the matching subtree
/// * Alphabetical depth-first enumeration that stops once the bound is reached
/// * Read-only queries through `&self`, so a loaded trie can be shared freely
#[derive(Debug, Default)]
pub struct PrefixTrie {
    /// The root node of the trie, representing the empty prefix
    root: TrieNode,

    /// Number of distinct (case-folded) words stored
    len: usize,
}

impl PrefixTrie {
    /// Creates a new empty `PrefixTrie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word into the trie.
    ///
    /// The word is lowercased for keying while the original spelling is kept
    /// as its surface form. Re-inserting a word that differs only in case
    /// replaces the stored spelling with the new one.
    ///
    /// Empty words are ignored: no node is touched and the root never becomes
    /// terminal.
    ///
    /// # Returns
    ///
    /// `true` if a previously unknown word was added, `false` if the word was
    /// already present (or empty).
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            tracing::trace!("Ignoring empty word");
            return false;
        }

        let mut node = &mut self.root;
        for c in fold_case(word).chars() {
            node = node.child_or_insert(c);
        }

        let is_new = node.stored_word.replace(word.to_owned()).is_none();
        if is_new {
            self.len += 1;
        }
        is_new
    }

    /// Returns up to `limit` stored words starting with `prefix`.
    ///
    /// Matching ignores case; results are the stored surface forms, ordered
    /// alphabetically by their lowercase keys. An unknown prefix and a zero
    /// limit both yield an empty vector.
    pub fn suggest<P>(&self, prefix: P, limit: usize) -> Vec<String>
    where
        P: AsRef<str>,
    {
        if limit == 0 {
            return Vec::new();
        }

        self.completions(prefix)
            .take(limit)
            .map(str::to_owned)
            .collect()
    }

    /// Same as [`suggest`](Self::suggest) with [`DEFAULT_SUGGESTION_LIMIT`].
    pub fn suggest_default<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        self.suggest(prefix, DEFAULT_SUGGESTION_LIMIT)
    }

    /// Lazily enumerates every stored word starting with `prefix`.
    ///
    /// Nodes are only visited as the iterator is advanced, so consuming the
    /// first `n` items costs the nodes needed to produce them, not the size
    /// of the whole matching subtree.
    pub fn completions<P>(&self, prefix: P) -> Completions<'_>
    where
        P: AsRef<str>,
    {
        match self.find_node(prefix.as_ref()) {
            Some(node) => Completions::new(node),
            None => Completions::empty(),
        }
    }

    /// Returns the stored surface form of `word`, if it was inserted.
    pub fn get<W>(&self, word: W) -> Option<&str>
    where
        W: AsRef<str>,
    {
        self.find_node(word.as_ref())?.stored_word.as_deref()
    }

    /// Checks whether `word` was inserted, ignoring case.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.find_node(word.as_ref())
            .is_some_and(TrieNode::is_terminal)
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes in the trie, including the root.
    ///
    /// This walks the whole tree, so it's an O(n) operation.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Walks from the root along the case-folded `prefix`.
    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        fold_case(prefix)
            .chars()
            .try_fold(&self.root, |node, c| node.child(c))
    }
}

impl<S> Extend<S> for PrefixTrie
where
    S: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S> FromIterator<S> for PrefixTrie
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

/// Iterator over the surface forms stored below a prefix node.
///
/// Produced by [`PrefixTrie::completions`]. Performs a pre-order depth-first
/// walk with an explicit stack, visiting children in ascending key order.
/// A node's children are expanded only when the next item is requested.
#[derive(Debug)]
pub struct Completions<'a> {
    /// Nodes waiting to be visited; the top of the stack is visited next
    stack: Vec<&'a TrieNode>,

    /// Last visited node whose children have not been pushed yet
    pending: Option<&'a TrieNode>,
}

impl<'a> Completions<'a> {
    fn new(start: &'a TrieNode) -> Self {
        Self {
            stack: vec![start],
            pending: None,
        }
    }

    fn empty() -> Self {
        Self {
            stack: Vec::new(),
            pending: None,
        }
    }

    fn expand(&mut self, node: &'a TrieNode) {
        // Reversed so the smallest key is popped first.
        self.stack
            .extend(node.sorted_children().into_iter().rev().map(|(_, child)| child));
    }
}

impl<'a> Iterator for Completions<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.pending.take() {
                self.expand(node);
            }

            let node = self.stack.pop()?;
            self.pending = Some(node);

            if let Some(word) = node.stored_word.as_deref() {
                return Some(word);
            }
        }
    }
}

impl std::iter::FusedIterator for Completions<'_> {}
