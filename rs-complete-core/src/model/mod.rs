//! Top-level module for the prefix-completion system.
//!
//! This crate provides a character-level completion trie, including:
//! - Per-character nodes with a recursive branching statistic (`TrieNode`)
//! - A root collection with build, query and persistence (`PrefixTrie`)

/// Single-character trie node.
///
/// Owns its children in insertion order, carries the subtree statistic,
/// and implements ranking, word reconstruction and prefix descent.
pub mod trie_node;

/// Top-level trie keyed by first character.
///
/// Exposes bulk building from a word list, the public completion query,
/// and whole-structure save/load.
pub mod prefix_trie;

pub use prefix_trie::PrefixTrie;
pub use trie_node::TrieNode;
