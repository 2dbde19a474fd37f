//! Crate-internal test suites.
//!
//! Component-level tests that need fixtures (scratch files, environment
//! variables, mocked sources). Tests for the trie itself live next to it in
//! `data_structures::prefix_trie::tests`.


pub use test_utils::{vocabulary_text, TestFixture, SAMPLE_WORDS};
