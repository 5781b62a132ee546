//! # Char Trie
//!
//! An uncompressed prefix tree (trie) keyed by strings.
//!
//! Each character of a key occupies one node, so keys that share a prefix share
//! the nodes spelling it. The node at the end of a key holds a copy of the key,
//! which is what separates "this exact string was added" from "this string is
//! only a prefix of something that was added".
//!
//! ## Features
//!
//! - **Exact membership**: `add`, `remove` and `contains` on whole keys
//! - **Pruning on removal**: nodes that only existed for a removed key are
//!   released again, walking back up through parent links
//! - **Pluggable child lookup**: linear scan, sorted binary search or hashed
//!   children, selected by a type parameter
//! - **Tree rendering**: an indented diagram of the node structure for diagnostics
//!
//! ## Example
//!
//! ```rust
//! use char_trie::Trie;
//!
//! let mut trie = Trie::<String>::new();
//!
//! assert_eq!(trie.add("car".to_string()), Ok(true));
//! assert_eq!(trie.add("cart".to_string()), Ok(true));
//! assert_eq!(trie.add("car".to_string()), Ok(false));
//!
//! assert_eq!(trie.contains("cart"), Ok(true));
//! assert_eq!(trie.contains("ca"), Ok(false));
//!
//! assert_eq!(trie.remove("car"), Ok(true));
//! assert_eq!(trie.len(), 1);
//! ```
//!
//! Empty keys are rejected by every keyed operation:
//!
//! ```rust
//! use char_trie::{Error, Trie};
//!
//! let mut trie = Trie::<&str>::new();
//! assert_eq!(trie.add(""), Err(Error::EmptyKey));
//! assert_eq!(trie.contains(""), Err(Error::EmptyKey));
//! ```

pub mod children;
mod iter;
mod node;
mod printer;
mod trie;
mod util;

use thiserror::Error;

// Re-export public types
pub use crate::children::{ChildList, LinearChildren, MapChildren, SortedChildren};
pub use crate::iter::Keys;
pub use crate::node::NodeId;
pub use crate::printer::{RenderStyle, TreeDisplay};
pub use crate::trie::Trie;

/// A trie owning `String` keys.
///
/// ```rust
/// use char_trie::{SortedChildren, StringTrie};
///
/// let mut trie = StringTrie::<SortedChildren>::new();
/// trie.add("beta".to_string()).unwrap();
/// trie.add("alpha".to_string()).unwrap();
///
/// let keys: Vec<&String> = trie.keys().collect();
/// assert_eq!(keys, vec!["alpha", "beta"]);
/// ```
pub type StringTrie<C = LinearChildren> = Trie<String, C>;

/// Errors that can occur in trie operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The key has no characters
    #[error("key must contain at least one character")]
    EmptyKey,
}

/// Result type alias for trie operations
pub type Result<T> = std::result::Result<T, Error>;
