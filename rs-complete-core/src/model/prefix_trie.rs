use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::trie_node::TrieNode;
use crate::io::{build_output_path, read_file};

/// The top-level completion trie, keyed by first character.
///
/// This struct manages:
/// - `roots`: a map from a word's first character to its root `TrieNode`,
///   created lazily on first insertion.
///
/// The intended lifecycle is batch-build, then query: insert the whole
/// vocabulary, run one aggregation pass ([`PrefixTrie::refresh_counts`]),
/// persist, and serve read-only completion queries afterwards. Nothing
/// re-aggregates automatically after later insertions.
#[derive(Serialize, Deserialize, Debug)]
pub struct PrefixTrie {
	roots: HashMap<char, TrieNode>,
}

impl PrefixTrie {
	/// Returns a default, empty `PrefixTrie`.
	///
	/// Useful for creating a blank trie that can then be filled via
	/// [`PrefixTrie::insert`] or [`PrefixTrie::build`].
	pub fn default() -> Self {
		Self { roots: HashMap::new() }
	}

	/// Loads a `PrefixTrie` from a binary artifact if one exists next to
	/// `word_list`, otherwise builds it from the word list and serializes it.
	///
	/// - `word_list` is a text file with one word per line.
	/// - Checks if a `.bin` sibling exists for fast loading.
	/// - Uses `postcard` for compact serialization/deserialization.
	///
	/// # Errors
	/// Returns an error if neither the binary nor the word list can be read,
	/// or if writing the binary fails.
	pub fn new<P: AsRef<Path>>(word_list: P) -> Result<Self, Box<dyn std::error::Error>> {
		let binary_data_path = build_output_path(&word_list, "bin")?;
		if binary_data_path.exists() {
			return Self::load(binary_data_path);
		}

		let lines = read_file(&word_list)?;
		let mut trie = Self::default();
		trie.build(lines.iter().map(String::as_str));
		trie.save(binary_data_path)?;
		Ok(trie)
	}

	/// Inserts a single word into the trie.
	///
	/// # Behavior
	/// - Empty input is silently skipped (no node created, no error).
	/// - The root for the first character is created on demand; every
	///   further character walks into (or creates) one child node.
	/// - Re-inserting an existing word creates no new nodes.
	///
	/// # Notes
	/// - UTF-8 safe: walks characters, not bytes.
	/// - Does not touch the branching statistic; call
	///   [`PrefixTrie::refresh_counts`] once after bulk insertion.
	pub fn insert(&mut self, word: &str) {
		let mut queue = word.chars();
		let first = match queue.next() {
			Some(symbol) => symbol,
			None => return,
		};
		let rest: Vec<char> = queue.collect();

		let root = self.roots.entry(first).or_insert_with(|| TrieNode::new(first, 0));
		root.push(&rest);
	}

	/// Inserts every word of a vocabulary, then runs the aggregation pass.
	///
	/// The original's batch build: insert all (empties skipped), then one
	/// [`PrefixTrie::refresh_counts`] over every root. Progress display, if
	/// wanted, belongs to the caller driving [`PrefixTrie::insert`] itself.
	pub fn build<'a, I>(&mut self, words: I)
	where
		I: IntoIterator<Item = &'a str>,
	{
		for word in words {
			self.insert(word);
		}
		self.refresh_counts();
	}

	/// Recomputes the branching statistic across the whole structure.
	///
	/// Runs the post-order refresh on every root's subtree. Must run once
	/// after bulk insertion and before queries or persistence; deterministic,
	/// no failure mode.
	pub fn refresh_counts(&mut self) {
		for root in self.roots.values_mut() {
			root.refresh_count();
		}
	}

	/// Returns the root node for `symbol`, if any word starting with that
	/// character was inserted.
	pub fn root(&self, symbol: char) -> Option<&TrieNode> {
		self.roots.get(&symbol)
	}

	/// Completes `text` with up to `count` words from the vocabulary.
	///
	/// Selects the root for the first character and walks the remaining
	/// characters down the trie; completion then runs at the reached node
	/// with the full query as the base, so every returned word starts with
	/// `text`.
	///
	/// # Returns
	/// - `Ok(words)` with 0 to `count` distinct completions. An empty list
	///   means the prefix dead-ends mid-walk, or the query is itself a fully
	///   inserted word with no longer sibling — only paths ending at a
	///   childless node produce words.
	/// - `Err(_)` if `text` is empty or no inserted word starts with its
	///   first character (a lookup miss, never mapped to another root).
	pub fn complete(&self, text: &str, count: usize) -> Result<Vec<String>, String> {
		let mut queue = text.chars();
		let first = match queue.next() {
			Some(symbol) => symbol,
			None => return Err("Prefix must not be empty".to_owned()),
		};

		let root = match self.roots.get(&first) {
			Some(root) => root,
			None => return Err(format!("No words start with '{}'", first)),
		};

		let rest: Vec<char> = queue.collect();
		Ok(root.complete(text, &rest, count))
	}

	/// Serializes the whole trie to a single binary artifact.
	///
	/// Overwrites any existing file at `filepath`. Every node and every
	/// field is written; a later [`PrefixTrie::load`] restores an isomorphic
	/// structure.
	pub fn save<P: AsRef<Path>>(&self, filepath: P) -> Result<(), Box<dyn std::error::Error>> {
		let bytes = postcard::to_stdvec(self)?;
		std::fs::write(filepath, bytes)?;
		Ok(())
	}

	/// Deserializes a trie previously written by [`PrefixTrie::save`].
	///
	/// # Errors
	/// Returns an error if the file is missing or its content is not a
	/// valid serialized trie; corruption is not recoverable here.
	pub fn load<P: AsRef<Path>>(filepath: P) -> Result<Self, Box<dyn std::error::Error>> {
		let bytes = std::fs::read(filepath)?;
		Ok(postcard::from_bytes(&bytes)?)
	}
}
