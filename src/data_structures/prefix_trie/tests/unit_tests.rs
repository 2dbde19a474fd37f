// Copyright (c) 2025 Prefix Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit tests for prefix trie insertion and suggestion retrieval.

use test_case::test_case;

use crate::data_structures::prefix_trie::{PrefixTrie, DEFAULT_SUGGESTION_LIMIT};

fn trie_of(words: &[&str]) -> PrefixTrie {
    words.iter().collect()
}

#[test]
fn test_trie_basic_operations() {
    let mut trie = PrefixTrie::new();

    // Test initial state
    assert!(trie.is_empty());
    assert_eq!(trie.len(), 0);
    assert_eq!(trie.node_count(), 1);

    // Test insertion
    assert!(trie.insert("hello"));
    assert_eq!(trie.len(), 1);
    assert!(!trie.is_empty());
    assert_eq!(trie.node_count(), 6);

    // Test membership
    assert!(trie.contains("hello"));
    assert!(trie.contains("HeLLo"));
    assert!(!trie.contains("hell"));
    assert!(!trie.contains("nonexistent"));
}

#[test_case("ap" ; "lowercase prefix")]
#[test_case("AP" ; "uppercase prefix")]
#[test_case("Ap" ; "mixed case prefix")]
#[test_case("apple" ; "whole word")]
fn test_case_insensitive_match_preserves_surface_form(prefix: &str) {
    let trie = trie_of(&["Apple"]);
    assert_eq!(trie.suggest(prefix, 3), vec!["Apple"]);
}

#[test]
fn test_suggestions_are_alphabetical() {
    let trie = trie_of(&["cat", "car", "cap"]);
    assert_eq!(trie.suggest("ca", 3), vec!["cap", "car", "cat"]);
}

#[test]
fn test_prefix_word_precedes_its_extensions() {
    let trie = trie_of(&["cart", "car", "carbon", "care"]);
    assert_eq!(trie.suggest("car", 10), vec!["car", "carbon", "care", "cart"]);
}

#[test]
fn test_bound_keeps_smallest_matches() {
    let words = [
        "azure", "apple", "avocado", "anchor", "amber", "axis", "atlas", "arch", "able", "acorn",
    ];
    let trie = trie_of(&words);

    let mut expected: Vec<&str> = words.to_vec();
    expected.sort_unstable();
    expected.truncate(3);

    assert_eq!(trie.suggest("a", 3), expected);
}

#[test_case(0 ; "zero limit")]
#[test_case(1 ; "limit of one")]
#[test_case(5 ; "limit above match count")]
fn test_limit_is_respected(limit: usize) {
    let trie = trie_of(&["bay", "bat", "bar"]);
    let result = trie.suggest("ba", limit);

    let expected: Vec<&str> = ["bar", "bat", "bay"].into_iter().take(limit).collect();
    assert_eq!(result, expected);
}

#[test]
fn test_no_match_returns_empty() {
    let empty = PrefixTrie::new();
    assert!(empty.suggest("anything", 3).is_empty());
    assert!(empty.suggest("", 3).is_empty());

    let trie = trie_of(&["river", "road"]);
    assert!(trie.suggest("rx", 3).is_empty());
    assert!(trie.suggest("rivers", 3).is_empty());
}

#[test]
fn test_empty_prefix_returns_start_of_vocabulary() {
    let trie = trie_of(&["zebra", "mango", "kiwi", "banana", "lemon"]);
    assert_eq!(trie.suggest("", 2), vec!["banana", "kiwi"]);
}

#[test]
fn test_reinsert_is_idempotent_except_casing() {
    let mut trie = trie_of(&["rust", "ruby"]);
    let before = trie.node_count();

    assert!(!trie.insert("rust"));
    assert_eq!(trie.suggest("ru", 3), vec!["ruby", "rust"]);

    assert!(!trie.insert("RUST"));
    assert_eq!(trie.suggest("ru", 3), vec!["ruby", "RUST"]);
    assert_eq!(trie.get("rust"), Some("RUST"));

    assert_eq!(trie.len(), 2);
    assert_eq!(trie.node_count(), before);
}

#[test]
fn test_empty_word_is_ignored() {
    let mut trie = PrefixTrie::new();

    assert!(!trie.insert(""));
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 1);
    assert!(!trie.contains(""));
    assert!(trie.suggest("", 3).is_empty());
}

#[test]
fn test_suggest_default_uses_three() {
    let words = ["one", "onion", "online", "only", "onset"];
    let trie = trie_of(&words);
    let result = trie.suggest_default("on");

    let mut expected: Vec<&str> = words.to_vec();
    expected.sort_unstable();
    expected.truncate(DEFAULT_SUGGESTION_LIMIT);

    assert_eq!(result, vec!["one", "onion", "online"]);
    assert_eq!(result, expected);
}

#[test]
fn test_completions_are_lazy_and_fused() {
    let trie = trie_of(&["tea", "ten", "ted"]);
    let mut completions = trie.completions("te");

    assert_eq!(completions.next(), Some("tea"));
    assert_eq!(completions.next(), Some("ted"));
    assert_eq!(completions.next(), Some("ten"));
    assert_eq!(completions.next(), None);
    assert_eq!(completions.next(), None);
}

#[test]
fn test_first_completion_leaves_children_unexpanded() {
    let mut words = vec!["k".to_string()];
    words.extend((0..500).map(|i| format!("k{i:03}")));
    let trie: PrefixTrie = words.iter().collect();

    let mut completions = trie.completions("k");
    assert_eq!(completions.next(), Some("k"));

    // The 500-word subtree below "k" has not been touched yet
    assert!(completions.stack.is_empty());
    assert!(completions.pending.is_some());
}

#[test]
fn test_bound_skips_untouched_sibling_subtree() {
    let mut words = vec!["aa".to_string()];
    words.extend((0..1_000).map(|i| format!("b{i:04}")));
    let trie: PrefixTrie = words.iter().collect();

    let mut completions = trie.completions("");
    assert_eq!(completions.next(), Some("aa"));

    // Only the unvisited "b" node waits on the stack; none of its descendants
    assert_eq!(completions.stack.len(), 1);
    assert!(completions.stack.iter().all(|node| node.stored_word.is_none()));
    assert_eq!(trie.suggest("", 1), vec!["aa"]);
}

#[test]
fn test_non_ascii_words() {
    let trie = trie_of(&["Écoute", "école", "eclair"]);

    assert_eq!(trie.suggest("É", 5), vec!["école", "Écoute"]);
    assert_eq!(trie.suggest("e", 5), vec!["eclair"]);
}

#[test]
fn test_extend_adds_words() {
    let mut trie = PrefixTrie::new();
    trie.extend(vec!["north".to_string(), "south".to_string()]);
    trie.extend(["east", "west", "North"]);

    assert_eq!(trie.len(), 4);
    assert_eq!(trie.suggest("n", 3), vec!["North"]);
}

#[test]
fn test_deep_word_does_not_overflow() {
    let long_word = "a".repeat(50_000);
    let mut trie = PrefixTrie::new();
    trie.insert(&long_word);
    trie.insert("ab");

    let result = trie.suggest("a", 3);
    assert_eq!(result.len(), 2);
    assert_eq!(result[1], "ab");
}
