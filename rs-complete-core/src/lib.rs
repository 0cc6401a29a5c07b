//! Character-level word-completion library.
//!
//! This crate provides a ranked prefix-trie completion system including:
//! - A character-per-node trie built from a word list
//! - A recursive subtree statistic used for ranking branches
//! - Greedy single- and multi-word completion with duplicate avoidance
//! - Whole-structure binary persistence
//! - Internal utilities for I/O and path handling
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core trie structures and completion logic.
///
/// This module exposes the high-level completion interface while keeping
/// internal helpers private.
pub mod model;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;
