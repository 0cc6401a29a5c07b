use rs_complete_core::model::{PrefixTrie, TrieNode};

fn build(words: &[&str]) -> PrefixTrie {
    let mut trie = PrefixTrie::default();
    trie.build(words.iter().copied());
    trie
}

fn walk<'a>(trie: &'a PrefixTrie, word: &str) -> Option<&'a TrieNode> {
    let mut chars = word.chars();
    let mut node = trie.root(chars.next()?)?;
    for symbol in chars {
        node = node.branch(symbol)?;
    }
    Some(node)
}

fn node_count(node: &TrieNode) -> usize {
    1 + node.children().iter().map(node_count).sum::<usize>()
}

// count == sum of children counts at every node, leaves are 0
fn assert_count_invariant(node: &TrieNode) {
    if node.children().is_empty() {
        assert_eq!(node.count(), 0, "leaf '{}' must have count 0", node.symbol());
    } else {
        let sum: u64 = node.children().iter().map(TrieNode::count).sum();
        assert_eq!(node.count(), sum, "node '{}' count != children sum", node.symbol());
    }
    for child in node.children() {
        assert_count_invariant(child);
    }
}

#[test]
fn inserted_words_are_reachable() {
    let words = ["bat", "ban", "bad", "cat", "dog"];
    let trie = build(&words);

    for word in words {
        let node = walk(&trie, word).expect("inserted word must be reachable");
        // None of these words is a strict prefix of another, so every
        // terminal node must be childless
        assert!(node.children().is_empty(), "'{}' should end at a leaf", word);
    }
}

#[test]
fn depth_tracks_distance_from_root() {
    let trie = build(&["bat"]);

    let b = walk(&trie, "b").unwrap();
    let a = walk(&trie, "ba").unwrap();
    let t = walk(&trie, "bat").unwrap();
    assert_eq!(b.depth(), 0);
    assert_eq!(a.depth(), 1);
    assert_eq!(t.depth(), 2);
    assert_eq!(b.symbol(), 'b');
    assert_eq!(a.symbol(), 'a');
    assert_eq!(t.symbol(), 't');
}

#[test]
fn prefix_word_node_gains_children() {
    // "ba" ends at the 'a' node; inserting "bat" afterwards gives that
    // node a child, so "ba" is no longer a terminal node
    let trie = build(&["ba", "bat"]);

    let a = walk(&trie, "ba").unwrap();
    assert_eq!(a.children().len(), 1);
    assert_eq!(a.children()[0].symbol(), 't');
}

#[test]
fn reinsertion_creates_no_new_nodes() {
    let mut trie = PrefixTrie::default();
    trie.insert("bat");
    trie.insert("ban");

    let root_size = node_count(trie.root('b').unwrap());
    trie.insert("bat");
    trie.insert("ban");
    assert_eq!(node_count(trie.root('b').unwrap()), root_size);
}

#[test]
fn empty_words_are_skipped() {
    let mut trie = PrefixTrie::default();
    trie.insert("");
    trie.refresh_counts();

    // Nothing was inserted, so any lookup is a miss
    assert!(trie.complete("a", 1).is_err());

    // Empties mixed into a batch do not disturb the rest
    let trie = build(&["", "cat", ""]);
    assert!(walk(&trie, "cat").is_some());
}

#[test]
fn counts_satisfy_the_sum_invariant() {
    let trie = build(&["bat", "ban", "bad", "bring", "cat", "cab"]);

    for first in ['b', 'c'] {
        assert_count_invariant(trie.root(first).unwrap());
    }
}

#[test]
fn single_chain_counts_stay_zero() {
    let trie = build(&["cat"]);

    let mut node = trie.root('c').unwrap();
    assert_eq!(node.count(), 0);
    for symbol in "at".chars() {
        node = node.branch(symbol).unwrap();
        assert_eq!(node.count(), 0);
    }
}

#[test]
fn children_keep_insertion_order() {
    let trie = build(&["bat", "ban", "bad"]);

    let a = walk(&trie, "ba").unwrap();
    let symbols: Vec<char> = a.children().iter().map(TrieNode::symbol).collect();
    assert_eq!(symbols, vec!['t', 'n', 'd']);
}
