// Copyright (c) 2025 Prefix Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix trie.
//!
//! Each node owns its children outright. There are no parent pointers and no
//! shared ownership, so dropping the root releases the whole tree.

use fnv::FnvHashMap;

/// A node in the prefix trie.
///
/// The path from the root to a node spells a lowercased prefix. Terminal nodes
/// also keep the surface form of the word that was inserted last for that path.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Map of lowercase characters to child nodes
    pub children: FnvHashMap<char, TrieNode>,

    /// Original-case spelling of the word ending here, if any
    pub stored_word: Option<String>,
}

impl TrieNode {
    /// Whether the root-to-node path spells a complete vocabulary word.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.stored_word.is_some()
    }

    /// Returns the child under `c`, creating it when missing.
    pub fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_default()
    }

    /// Returns the child under `c`, if any.
    #[inline]
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Children in ascending order of their character key.
    pub fn sorted_children(&self) -> Vec<(char, &TrieNode)> {
        let mut children: Vec<(char, &TrieNode)> =
            self.children.iter().map(|(c, node)| (*c, node)).collect();
        children.sort_unstable_by_key(|(c, _)| *c);
        children
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

impl Drop for TrieNode {
    // Unlinks descendants onto a heap stack so very long words cannot
    // exhaust the call stack through recursive drops.
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_not_terminal() {
        let node = TrieNode::default();
        assert!(!node.is_terminal());
        assert!(node.children.is_empty());
        assert_eq!(node.subtree_size(), 1);
    }

    #[test]
    fn test_sorted_children_ignores_insertion_order() {
        let mut node = TrieNode::default();
        for c in ['t', 'a', 'p', 'b'] {
            node.child_or_insert(c);
        }

        let keys: Vec<char> = node.sorted_children().into_iter().map(|(c, _)| c).collect();
        assert_eq!(keys, vec!['a', 'b', 'p', 't']);
        assert_eq!(node.subtree_size(), 5);
    }

    #[test]
    fn test_child_or_insert_reuses_existing_child() {
        let mut node = TrieNode::default();
        node.child_or_insert('x').stored_word = Some("X".to_string());
        let child = node.child_or_insert('x');

        assert_eq!(child.stored_word.as_deref(), Some("X"));
        assert_eq!(node.children.len(), 1);
    }
}
