use serde::{Deserialize, Serialize};

/// Ceiling on diversification passes in [`TrieNode::words`].
///
/// When fewer than `count` distinct completions exist below a node, the
/// ranking loop would otherwise re-select the same branches forever; the
/// ceiling turns that case into a best-effort partial result.
pub(crate) const MAX_TRIES: usize = 64;

/// Represents a single character in the completion trie.
///
/// A `TrieNode` corresponds to one character of one or more inserted words;
/// the concatenated symbols along the path from a root to a node spell the
/// prefix up to that node. A node with no children is the implicit end of at
/// least one inserted word — there is no explicit end-of-word marker, so a
/// word that is a strict prefix of another word is never itself reachable as
/// a completion.
///
/// # Responsibilities
/// - Grow the trie one character at a time during insertion
/// - Recompute the recursive branching statistic (`count`)
/// - Rank children by `count` with a stable, insertion-order tie-break
/// - Reconstruct single words and bounded multi-word completion lists
///
/// # Invariants
/// - Child symbols are unique within one node
/// - `children` keeps insertion order (it participates in tie-breaking)
/// - After [`TrieNode::refresh_count`], `count` equals the sum of the
///   children's counts; a childless node has `count` 0
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TrieNode {
	/// The character this node represents.
	symbol: char,

	/// Distance from the owning root (the root itself is depth 0).
	depth: usize,

	/// Recursive branching statistic: sum of the children's counts.
	///
	/// Zero for a childless node, and therefore zero along any
	/// single-branch chain; the value grows only where a subtree fans out
	/// into several distinct words. Not a word frequency.
	count: u64,

	/// Reserved slot, always zero. Kept for artifact-structure fidelity.
	bias: i64,

	/// Reserved slot, always zero. Kept for artifact-structure fidelity.
	next_words: u64,

	/// Owned children, in insertion order.
	children: Vec<TrieNode>,
}

impl TrieNode {
	/// Creates a childless node for `symbol` at `depth`.
	pub(crate) fn new(symbol: char, depth: usize) -> Self {
		Self {
			symbol,
			depth,
			count: 0,
			bias: 0,
			next_words: 0,
			children: Vec::new(),
		}
	}

	/// The character this node represents.
	pub fn symbol(&self) -> char {
		self.symbol
	}

	/// Distance from the owning root.
	pub fn depth(&self) -> usize {
		self.depth
	}

	/// The branching statistic, as of the last aggregation pass.
	pub fn count(&self) -> u64 {
		self.count
	}

	/// The direct children, in insertion order.
	pub fn children(&self) -> &[TrieNode] {
		&self.children
	}

	/// Returns the direct child carrying `symbol`, if any.
	pub fn branch(&self, symbol: char) -> Option<&TrieNode> {
		self.children.iter().find(|child| child.symbol == symbol)
	}

	/// Inserts the remaining characters of a word below this node.
	///
	/// Creates one child per character not already present and recurses
	/// into it. An exhausted sequence ends the recursion; re-inserting an
	/// existing word therefore creates no new nodes.
	pub(crate) fn push(&mut self, rest: &[char]) {
		if rest.is_empty() {
			return; // quit node branching
		}
		let symbol = rest[0];

		let index = match self.children.iter().position(|child| child.symbol == symbol) {
			Some(index) => index,
			None => {
				self.children.push(TrieNode::new(symbol, self.depth + 1));
				self.children.len() - 1
			}
		};

		self.children[index].push(&rest[1..]); // next recursion
	}

	/// Recomputes `count` for this node and its whole subtree.
	///
	/// Post-order: every child is refreshed first, then this node's count
	/// becomes the sum of the children's counts (0 for a leaf). Returns the
	/// refreshed count.
	pub(crate) fn refresh_count(&mut self) -> u64 {
		let mut sum = 0;
		for child in &mut self.children {
			sum += child.refresh_count();
		}
		self.count = sum; // recursive counting
		self.count
	}

	/// Returns up to `n` children with the largest `count`, descending.
	///
	/// The sort is stable and keyed on `count` only, so children with equal
	/// counts keep their insertion order. If `n` exceeds the number of
	/// children, all of them are returned in ranked order.
	pub fn top_nodes(&self, n: usize) -> Vec<&TrieNode> {
		let mut ranked: Vec<&TrieNode> = self.children.iter().collect();
		ranked.sort_by(|a, b| b.count.cmp(&a.count));
		ranked.truncate(n);
		ranked
	}

	/// Resolves one word below this node, greedily following the ranking.
	///
	/// Appends this node's symbol to `prev` and, if the node is childless,
	/// returns the result as the finished word. Otherwise tries every child
	/// in ranked order and returns the first resolved word that is not in
	/// `exclusion_list`.
	///
	/// # Notes
	/// - If every ranked child resolves to an excluded word, the last
	///   resolved word is returned anyway; the caller is expected to filter
	///   duplicates.
	pub fn word(&self, prev: &str, exclusion_list: &[String]) -> String {
		let mut w = String::with_capacity(prev.len() + self.symbol.len_utf8());
		w.push_str(prev);
		w.push(self.symbol);

		let ranked = self.top_nodes(self.children.len());
		if ranked.is_empty() {
			return w;
		}

		let mut candidate = String::new();
		for branch in ranked {
			candidate = branch.word(&w, exclusion_list);
			if !exclusion_list.contains(&candidate) {
				return candidate;
			}
		}
		candidate
	}

	/// Resolves up to `count` distinct words below this node.
	///
	/// Each pass ranks the children with N = `count` and resolves one word
	/// per ranked child, using the words accumulated so far as the exclusion
	/// list; only words not already accumulated are appended, and never past
	/// `count`. A childless node ends the loop immediately with whatever was
	/// accumulated.
	///
	/// # Notes
	/// - Bounded by [`MAX_TRIES`] passes: when fewer than `count` distinct
	///   completions exist, the result is the accumulated partial list, not
	///   an error.
	/// - `prev` is used verbatim as the accumulation base; this node's own
	///   symbol is not appended (the caller passes the full query prefix).
	pub fn words(&self, prev: &str, count: usize) -> Vec<String> {
		let mut words: Vec<String> = Vec::new();

		let mut tries = 0;
		while words.len() < count && tries < MAX_TRIES {
			let top = self.top_nodes(count);
			if top.is_empty() {
				return words;
			}

			for node in top {
				let candidate = node.word(prev, &words);
				if !words.contains(&candidate) {
					words.push(candidate);
				}
				if words.len() == count {
					break;
				}
			}

			tries += 1;
		}
		words
	}

	/// Walks the remaining query characters and completes at the end.
	///
	/// Descends one child per character in `rest`. Once this node is
	/// childless or `rest` is exhausted, completion happens here via
	/// [`TrieNode::words`] with `original` (the full query) as the base.
	/// A character with no matching child ends the walk with an empty list;
	/// a dead-end prefix is a normal no-match outcome, not an error.
	pub fn complete(&self, original: &str, rest: &[char], count: usize) -> Vec<String> {
		if self.children.is_empty() || rest.is_empty() {
			return self.words(original, count);
		}

		match self.branch(rest[0]) {
			Some(child) => child.complete(original, &rest[1..], count),
			None => Vec::new(),
		}
	}
}
