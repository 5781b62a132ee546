//! Child-lookup strategies for trie nodes.
//!
//! Every node keeps its children in a [`ChildList`]. The trie algorithms only
//! ever ask a child list to find a character, fetch an entry by position, append
//! a new entry and remove an entry by position, so the backing structure can be
//! swapped without touching insertion, lookup or pruning.
//!
//! - [`LinearChildren`] scans a small vector. Fan-out is bounded by the alphabet
//!   in practice, so this is the default.
//! - [`SortedChildren`] keeps entries ordered by character and binary-searches.
//! - [`MapChildren`] adds a hash index for wide fan-out.
use std::collections::HashMap;
use std::fmt::Debug;

use crate::node::NodeId;

/// Minimum number of slots reserved when a child list runs out of capacity.
pub const CHILD_CHUNK: usize = 10;

/// Storage for the children of a single node.
///
/// Positions are dense: `0..len()` are all valid, and `remove` shifts the
/// following entries down by one.
pub trait ChildList: Default + Clone + Debug {
    /// Returns the number of children.
    fn len(&self) -> usize;

    /// Returns `true` if there are no children.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds the position of the child labelled `character`.
    fn position(&self, character: char) -> Option<usize>;

    /// Returns the child at `index`, with its character.
    fn get(&self, index: usize) -> Option<(char, NodeId)>;

    /// Adds a child. The caller guarantees no child labelled `character` exists.
    fn insert(&mut self, character: char, child: NodeId);

    /// Removes the child at `index`, returning it.
    fn remove(&mut self, index: usize) -> Option<NodeId>;
}

// Grows in chunks so a burst of siblings does not reallocate once per push.
fn push_chunked(entries: &mut Vec<(char, NodeId)>, entry: (char, NodeId)) {
    if entries.len() == entries.capacity() {
        entries.reserve(CHILD_CHUNK);
    }
    entries.push(entry);
}

/// Unordered children scanned linearly. Insertion order is preserved.
#[derive(Debug, Clone, Default)]
pub struct LinearChildren {
    entries: Vec<(char, NodeId)>,
}

impl ChildList for LinearChildren {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn position(&self, character: char) -> Option<usize> {
        self.entries.iter().position(|&(c, _)| c == character)
    }

    fn get(&self, index: usize) -> Option<(char, NodeId)> {
        self.entries.get(index).copied()
    }

    fn insert(&mut self, character: char, child: NodeId) {
        debug_assert!(self.position(character).is_none(), "duplicate sibling {:?}", character);
        push_chunked(&mut self.entries, (character, child));
    }

    fn remove(&mut self, index: usize) -> Option<NodeId> {
        if index >= self.entries.len() {
            return None;
        }
        Some(self.entries.remove(index).1)
    }
}

/// Children kept ordered by character and located by binary search.
///
/// Iteration (and therefore rendering and key enumeration) follows character
/// order rather than insertion order.
#[derive(Debug, Clone, Default)]
pub struct SortedChildren {
    entries: Vec<(char, NodeId)>,
}

impl SortedChildren {
    fn search(&self, character: char) -> std::result::Result<usize, usize> {
        self.entries.binary_search_by_key(&character, |&(c, _)| c)
    }
}

impl ChildList for SortedChildren {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn position(&self, character: char) -> Option<usize> {
        self.search(character).ok()
    }

    fn get(&self, index: usize) -> Option<(char, NodeId)> {
        self.entries.get(index).copied()
    }

    fn insert(&mut self, character: char, child: NodeId) {
        match self.search(character) {
            Ok(_) => debug_assert!(false, "duplicate sibling {:?}", character),
            Err(at) => {
                if self.entries.len() == self.entries.capacity() {
                    self.entries.reserve(CHILD_CHUNK);
                }
                self.entries.insert(at, (character, child));
            }
        }
    }

    fn remove(&mut self, index: usize) -> Option<NodeId> {
        if index >= self.entries.len() {
            return None;
        }
        Some(self.entries.remove(index).1)
    }
}

/// Children in insertion order with a hash index from character to position.
///
/// Lookup is O(1); removal is O(k) because every later position shifts.
#[derive(Debug, Clone, Default)]
pub struct MapChildren {
    entries: Vec<(char, NodeId)>,
    positions: HashMap<char, usize>,
}

impl ChildList for MapChildren {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn position(&self, character: char) -> Option<usize> {
        self.positions.get(&character).copied()
    }

    fn get(&self, index: usize) -> Option<(char, NodeId)> {
        self.entries.get(index).copied()
    }

    fn insert(&mut self, character: char, child: NodeId) {
        debug_assert!(!self.positions.contains_key(&character), "duplicate sibling {:?}", character);
        self.positions.insert(character, self.entries.len());
        push_chunked(&mut self.entries, (character, child));
    }

    fn remove(&mut self, index: usize) -> Option<NodeId> {
        if index >= self.entries.len() {
            return None;
        }
        let (character, child) = self.entries.remove(index);
        self.positions.remove(&character);
        for (c, _) in &self.entries[index..] {
            if let Some(pos) = self.positions.get_mut(c) {
                *pos -= 1;
            }
        }
        Some(child)
    }
}
