//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for
//! adding, removing and looking up string keys.

use std::fmt;

use log::{debug, trace};

use crate::children::{ChildList, LinearChildren};
use crate::iter::Keys;
use crate::node::{Node, NodeArena, NodeId};
use crate::printer::{RenderStyle, TreeDisplay};
use crate::util::{non_empty, split_last_char};
use crate::Result;

/// A mutable, uncompressed prefix tree keyed by strings.
///
/// Every character of a key gets its own node, so keys sharing a prefix share
/// the nodes for that prefix. The node that ends a key keeps a copy of the key.
///
/// Removing a key prunes the chain of nodes that existed only for it, walking
/// back up through parent links until a node still terminates another key or
/// still has other children.
///
/// `C` selects how each node finds its children; see [`crate::children`].
#[derive(Clone)]
pub struct Trie<K, C = LinearChildren> {
    /// Node storage; the root lives at `NodeId::ROOT`
    pub(crate) nodes: NodeArena<K, C>,

    /// The number of keys stored in the trie
    size: usize,
}

impl<K, C: ChildList> Trie<K, C> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let trie = Trie::<String>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an empty trie with room for `nodes` nodes before the arena grows.
    pub fn with_capacity(nodes: usize) -> Self {
        Trie {
            nodes: NodeArena::with_capacity(nodes),
            size: 0,
        }
    }

    /// Returns the number of keys stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::<String>::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.add("hello".to_string()).unwrap();
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie stores no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of live nodes, root included.
    ///
    /// An empty trie has exactly one node. After a key is removed, every node
    /// that existed only for that key is gone again.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Removes every key, keeping only the root.
    pub fn clear(&mut self) {
        debug!("clearing {} key(s) across {} node(s)", self.size, self.nodes.len());
        self.nodes.reset();
        self.size = 0;
    }

    /// Iterates over the stored keys depth-first.
    pub fn keys(&self) -> Keys<'_, K, C> {
        Keys::new(&self.nodes, self.size)
    }

    /// Returns a value that formats the trie as an indented tree.
    pub fn display(&self, style: RenderStyle) -> TreeDisplay<'_, K, C> {
        TreeDisplay::new(self, style)
    }

    pub(crate) fn root(&self) -> &Node<K, C> {
        &self.nodes[NodeId::ROOT]
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<K, C> {
        &self.nodes[id]
    }

    // Allocates a node under `parent` and links it into the parent's children.
    fn attach(&mut self, parent: NodeId, character: char, payload: Option<K>) -> NodeId {
        let node = match payload {
            Some(key) => Node::with_payload(parent, character, key),
            None => Node::new(parent, character),
        };
        let id = self.nodes.alloc(node);
        self.nodes[parent].add_child(character, id);
        id
    }

    // Unlinks `id` from its parent and frees its slot, returning the parent.
    fn detach(&mut self, id: NodeId) -> Option<NodeId> {
        let node = self.nodes.release(id)?;
        debug_assert!(node.is_leaf(), "detached a node that still has children");

        let parent = node.parent?;
        let character = node.character?;
        let index = self.nodes[parent].child_index(character);
        debug_assert!(index.is_some(), "node {:?} missing from its parent", id);
        if let Some(index) = index {
            self.nodes[parent].remove_child(index);
        }
        Some(parent)
    }

    // Walks up from `leaf`, detaching nodes that neither hold a key nor lead to one.
    fn prune_from(&mut self, leaf: NodeId) -> usize {
        let mut pruned = 0;
        let mut current = leaf;

        while current != NodeId::ROOT && self.nodes[current].is_dead() {
            match self.detach(current) {
                Some(parent) => current = parent,
                None => break,
            }
            pruned += 1;
        }

        pruned
    }
}

impl<K, C> Trie<K, C>
where
    K: AsRef<str>,
    C: ChildList,
{
    /// Builds a trie from a sequence of keys. Duplicates are ignored.
    ///
    /// Fails on the first empty key.
    pub fn from_keys<I>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
    {
        let mut trie = Self::new();
        for key in keys {
            trie.add(key)?;
        }
        Ok(trie)
    }

    /// Adds a key to the trie.
    ///
    /// Returns `Ok(true)` if the key was new and `Ok(false)` if it was already
    /// stored, in which case nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyKey`](crate::Error::EmptyKey) for a zero-length key.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::<&str>::new();
    /// assert_eq!(trie.add("car"), Ok(true));
    /// assert_eq!(trie.add("car"), Ok(false));
    /// assert!(trie.add("").is_err());
    /// ```
    pub fn add(&mut self, key: K) -> Result<bool> {
        let (head, last) = split_last_char(key.as_ref())?;

        let mut current = NodeId::ROOT;
        for character in head.chars() {
            current = match self.nodes[current].child(character) {
                Some(child) => child,
                None => self.attach(current, character, None),
            };
        }

        match self.nodes[current].child(last) {
            Some(existing) if self.nodes[existing].payload.is_some() => {
                trace!("add {:?}: already present", key.as_ref());
                return Ok(false);
            }
            Some(existing) => {
                trace!("add {:?}: marking existing prefix node", key.as_ref());
                self.nodes[existing].payload = Some(key);
            }
            None => {
                trace!("add {:?}: new leaf", key.as_ref());
                self.attach(current, last, Some(key));
            }
        }

        self.size += 1;
        Ok(true)
    }

    /// Removes a key, returning the stored copy if it was present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyKey`](crate::Error::EmptyKey) for a zero-length key.
    pub fn take<Q>(&mut self, key: &Q) -> Result<Option<K>>
    where
        Q: AsRef<str> + ?Sized,
    {
        let key = key.as_ref();
        let target = match self.find(key)? {
            Some(id) => id,
            None => return Ok(None),
        };

        // A node reached without a payload is only a prefix of other keys
        let removed = match self.nodes[target].payload.take() {
            Some(stored) => stored,
            None => return Ok(None),
        };
        self.size -= 1;

        if self.nodes[target].is_leaf() {
            let pruned = self.prune_from(target);
            debug!("remove {:?}: pruned {} node(s)", key, pruned);
        } else {
            trace!(
                "remove {:?}: kept node for {} child(ren)",
                key,
                self.nodes[target].children_len()
            );
        }

        Ok(Some(removed))
    }

    /// Removes a key from the trie.
    ///
    /// Returns `Ok(true)` if the key was stored and `Ok(false)` if it was absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyKey`](crate::Error::EmptyKey) for a zero-length key.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::<&str>::new();
    /// trie.add("car").unwrap();
    /// trie.add("cart").unwrap();
    ///
    /// assert_eq!(trie.remove("car"), Ok(true));
    /// assert_eq!(trie.remove("car"), Ok(false));
    /// assert_eq!(trie.contains("cart"), Ok(true));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Result<bool>
    where
        Q: AsRef<str> + ?Sized,
    {
        self.take(key).map(|removed| removed.is_some())
    }

    /// Returns `true` if the exact key is stored.
    ///
    /// A key that is only a prefix of stored keys is not contained.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyKey`](crate::Error::EmptyKey) for a zero-length key.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::<&str>::new();
    /// trie.add("cart").unwrap();
    ///
    /// assert_eq!(trie.contains("cart"), Ok(true));
    /// assert_eq!(trie.contains("car"), Ok(false));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> Result<bool>
    where
        Q: AsRef<str> + ?Sized,
    {
        self.get(key).map(|stored| stored.is_some())
    }

    /// Returns the stored copy of `key`, if present.
    pub fn get<Q>(&self, key: &Q) -> Result<Option<&K>>
    where
        Q: AsRef<str> + ?Sized,
    {
        Ok(self
            .find(key.as_ref())?
            .and_then(|id| self.nodes[id].payload.as_ref()))
    }

    /// Renders the trie as an indented tree using box-drawing characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::<&str>::new();
    /// trie.add("ab").unwrap();
    ///
    /// assert_eq!(trie.render(), "└── \n    └── a\n        └── (b) ab\n");
    /// ```
    pub fn render(&self) -> String {
        self.render_with(RenderStyle::default())
    }

    /// Renders the trie with the given connector style.
    pub fn render_with(&self, style: RenderStyle) -> String {
        self.display(style).to_string()
    }

    // Follows every character of `key` from the root.
    fn find(&self, key: &str) -> Result<Option<NodeId>> {
        let key = non_empty(key)?;

        let mut current = NodeId::ROOT;
        for character in key.chars() {
            match self.nodes[current].child(character) {
                Some(child) => current = child,
                None => return Ok(None),
            }
        }

        Ok(Some(current))
    }
}

impl<K, C: ChildList> Default for Trie<K, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> fmt::Debug for Trie<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("size", &self.size)
            .field("nodes", &self.nodes.len())
            .finish()
    }
}

// Two tries are equal when they store the same keys, whatever their shape.
impl<K, C> PartialEq for Trie<K, C>
where
    K: AsRef<str>,
    C: ChildList,
{
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.keys().all(|key| other.contains(key) == Ok(true))
    }
}

impl<K, C> Eq for Trie<K, C>
where
    K: AsRef<str>,
    C: ChildList,
{
}
