use std::fs;
use std::io::Write;

use rs_complete_core::model::PrefixTrie;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Read the vocabulary: one word per line
    // Empty lines are tolerated; insertion skips them
    let contents = fs::read_to_string("./data/words.txt")?;
    let words: Vec<&str> = contents.lines().collect();

    // Build the trie word by word, with a progress line every 100th word
    let mut trie = PrefixTrie::default();
    for (i, word) in words.iter().enumerate() {
        trie.insert(word);
        if i % 100 == 0 {
            print!("{} of {}\r", i, words.len());
            std::io::stdout().flush()?;
        }
    }
    println!("{} of {}", words.len(), words.len());

    // One aggregation pass after bulk insertion, before queries or saving
    trie.refresh_counts();

    // Persist the whole structure, then reload it to prove the round trip
    trie.save("./data/words.bin")?;
    let trie = PrefixTrie::load("./data/words.bin")?;

    // Query a few prefixes; each returns up to 3 completions
    for prefix in ["ba", "th", "qu"] {
        match trie.complete(prefix, 3) {
            Ok(completions) => println!("{}: {:?}", prefix, completions),
            Err(error) => println!("{}: {}", prefix, error),
        }
    }

    // A first character never inserted is a lookup miss, not a crash
    match trie.complete("ÿz", 1) {
        Ok(completions) => println!("ÿz: {:?}", completions),
        Err(error) => println!("ÿz: {}", error),
    }

    Ok(())
}
