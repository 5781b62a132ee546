//! Depth-first enumeration of stored keys.

use crate::children::ChildList;
use crate::node::{NodeArena, NodeId};

/// Iterator over the keys stored in a [`Trie`](crate::Trie).
///
/// Keys are yielded depth-first, a node's own key before the keys below it,
/// siblings in the order of the node's child list.
pub struct Keys<'a, K, C> {
    arena: &'a NodeArena<K, C>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K, C: ChildList> Keys<'a, K, C> {
    pub(crate) fn new(arena: &'a NodeArena<K, C>, len: usize) -> Self {
        Keys {
            arena,
            stack: vec![NodeId::ROOT],
            remaining: len,
        }
    }
}

impl<'a, K, C: ChildList> Iterator for Keys<'a, K, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let node = &self.arena[id];

            // Push children in reverse so the first child is visited first
            for index in (0..node.children_len()).rev() {
                if let Some(child) = node.get_child(index) {
                    self.stack.push(child);
                }
            }

            if let Some(key) = &node.payload {
                self.remaining -= 1;
                return Some(key);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, C: ChildList> ExactSizeIterator for Keys<'a, K, C> {}

#[cfg(test)]
mod tests {
    use crate::{SortedChildren, Trie};

    #[test]
    fn test_keys_preorder() {
        let trie = Trie::<String>::from_keys(
            ["to", "tea", "ted", "ten", "i", "in", "inn", "A"]
                .iter()
                .map(|s| s.to_string()),
        )
        .unwrap();

        let keys: Vec<&str> = trie.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["to", "tea", "ted", "ten", "i", "in", "inn", "A"]);
        assert_eq!(trie.keys().len(), 8);
    }

    #[test]
    fn test_keys_sorted_strategy_is_lexicographic() {
        let trie = Trie::<&str, SortedChildren>::from_keys(vec![
            "zebra", "apple", "apricot", "banana", "app",
        ])
        .unwrap();

        let keys: Vec<&str> = trie.keys().copied().collect();
        assert_eq!(keys, vec!["app", "apple", "apricot", "banana", "zebra"]);
    }

    #[test]
    fn test_keys_empty_trie() {
        let trie = Trie::<String>::new();
        assert_eq!(trie.keys().next(), None);
        assert_eq!(trie.keys().size_hint(), (0, Some(0)));
    }
}
