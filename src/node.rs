//! Internal node implementation for the trie.
//!
//! Nodes live in a [`NodeArena`] owned by the `Trie` and refer to each other by
//! [`NodeId`]. Ownership is strictly downward through the child lists; the
//! `parent` index is only a back-reference used to unwind during removal.

use std::ops::{Index, IndexMut};

use crate::children::ChildList;

/// Handle to a node inside a trie's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root occupies the first arena slot for the lifetime of the trie.
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub(crate) fn from_index(index: usize) -> Self {
        NodeId(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A trie vertex.
#[derive(Debug, Clone)]
pub(crate) struct Node<K, C> {
    /// Parent node, `None` only for the root
    pub parent: Option<NodeId>,

    /// Character this node adds to its parent's path, `None` only for the root
    pub character: Option<char>,

    /// The full key, present iff this node terminates a stored key
    pub payload: Option<K>,

    /// Child nodes, unique by character
    pub children: C,
}

impl<K, C: ChildList> Node<K, C> {
    /// Creates the root node.
    pub fn root() -> Self {
        Node {
            parent: None,
            character: None,
            payload: None,
            children: C::default(),
        }
    }

    /// Creates a payload-less node under `parent`.
    pub fn new(parent: NodeId, character: char) -> Self {
        Node {
            parent: Some(parent),
            character: Some(character),
            payload: None,
            children: C::default(),
        }
    }

    /// Creates a node under `parent` that terminates `key`.
    pub fn with_payload(parent: NodeId, character: char, key: K) -> Self {
        Node {
            payload: Some(key),
            ..Node::new(parent, character)
        }
    }

    /// Appends a child. The caller has already checked that `character` is free.
    pub fn add_child(&mut self, character: char, child: NodeId) {
        self.children.insert(character, child);
    }

    /// Removes the child at `index`, shifting later siblings down.
    pub fn remove_child(&mut self, index: usize) -> Option<NodeId> {
        self.children.remove(index)
    }

    /// Position of the child labelled `character`, if any.
    pub fn child_index(&self, character: char) -> Option<usize> {
        self.children.position(character)
    }

    pub fn get_child(&self, index: usize) -> Option<NodeId> {
        self.children.get(index).map(|(_, id)| id)
    }

    /// Looks up the child labelled `character` directly.
    pub fn child(&self, character: char) -> Option<NodeId> {
        self.child_index(character).and_then(|index| self.get_child(index))
    }

    pub fn children_len(&self) -> usize {
        self.children.len()
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A node that neither terminates a key nor leads to one.
    pub fn is_dead(&self) -> bool {
        self.payload.is_none() && self.is_leaf()
    }
}

/// Slot storage for nodes, with released slots recycled by later insertions.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<K, C> {
    slots: Vec<Option<Node<K, C>>>,
    vacant: Vec<NodeId>,
}

impl<K, C: ChildList> NodeArena<K, C> {
    /// Creates an arena holding only a root node.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity.max(1));
        slots.push(Some(Node::root()));
        NodeArena {
            slots,
            vacant: Vec::new(),
        }
    }

    /// Stores `node`, returning its handle.
    pub fn alloc(&mut self, node: Node<K, C>) -> NodeId {
        match self.vacant.pop() {
            Some(id) => {
                debug_assert!(self.slots[id.index()].is_none());
                self.slots[id.index()] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId::from_index(self.slots.len() - 1)
            }
        }
    }

    /// Frees the slot for `id`, returning the node that occupied it.
    ///
    /// The root is never released.
    pub fn release(&mut self, id: NodeId) -> Option<Node<K, C>> {
        if id == NodeId::ROOT {
            return None;
        }
        let node = self.slots.get_mut(id.index())?.take()?;
        self.vacant.push(id);
        Some(node)
    }

    /// Drops every node except a fresh root.
    pub fn reset(&mut self) {
        self.slots.truncate(1);
        self.slots[0] = Some(Node::root());
        self.vacant.clear();
    }
}

impl<K, C> NodeArena<K, C> {
    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<K, C>> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }
}

impl<K, C> Index<NodeId> for NodeArena<K, C> {
    type Output = Node<K, C>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match self.get(id) {
            Some(node) => node,
            None => panic!("no live node at {:?}", id),
        }
    }
}

impl<K, C> IndexMut<NodeId> for NodeArena<K, C> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.slots.get_mut(id.index()) {
            Some(Some(node)) => node,
            _ => panic!("no live node at {:?}", id),
        }
    }
}
