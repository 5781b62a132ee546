//! Examples of using the character trie
use char_trie::{RenderStyle, SortedChildren, StringTrie, Trie};

fn main() -> Result<(), char_trie::Error> {
    // Create a new trie with string keys
    let mut trie = StringTrie::<SortedChildren>::new();

    // Add some keys; adding a duplicate reports `false`
    for word in &["car", "cart", "cat", "dog"] {
        trie.add(word.to_string())?;
    }
    assert!(!trie.add("car".to_string())?);

    // Check membership
    assert!(trie.contains("cart")?);
    assert!(!trie.contains("ca")?);
    println!("{} keys in {} nodes", trie.len(), trie.node_count());
    println!("{}", trie);

    // Removing "cart" prunes the "t" node below "car"
    trie.remove("cart")?;
    println!("{}", trie.render_with(RenderStyle::Ascii));

    // Keys can also be borrowed strings
    let borrowed = Trie::<&str>::from_keys(vec!["alpha", "beta"])?;
    for key in borrowed.keys() {
        println!("{}", key);
    }

    // Empty keys are rejected rather than stored
    if let Err(err) = trie.add(String::new()) {
        println!("rejected: {}", err);
    }

    Ok(())
}
