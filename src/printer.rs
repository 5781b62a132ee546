//! Diagnostic rendering of a trie as an indented tree.
//!
//! Each node becomes one line: the indentation inherited from its ancestors, a
//! connector, then either the node's character or `(character) key` when the
//! node terminates a stored key. The root has no character and renders with an
//! empty label.
//!
//! ```text
//! └──
//!     └── c
//!         └── a
//!             ├── (r) car
//!             │   └── (t) cart
//!             └── (t) cat
//! ```

use std::fmt;

use crate::children::ChildList;
use crate::node::Node;
use crate::trie::Trie;

/// Connector glyphs used when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// Box-drawing characters: `├── `, `└── `, `│   `.
    Unicode,
    /// Plain ASCII: `|-- `, `` `-- ``, `|   `.
    Ascii,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle::Unicode
    }
}

impl RenderStyle {
    fn connector(self, is_last: bool) -> &'static str {
        match (self, is_last) {
            (RenderStyle::Unicode, true) => "└── ",
            (RenderStyle::Unicode, false) => "├── ",
            (RenderStyle::Ascii, true) => "`-- ",
            (RenderStyle::Ascii, false) => "|-- ",
        }
    }

    fn indent(self, is_last: bool) -> &'static str {
        match (self, is_last) {
            (_, true) => "    ",
            (RenderStyle::Unicode, false) => "│   ",
            (RenderStyle::Ascii, false) => "|   ",
        }
    }
}

/// A trie formatted as a tree diagram. Created by [`Trie::display`].
pub struct TreeDisplay<'a, K, C> {
    trie: &'a Trie<K, C>,
    style: RenderStyle,
}

impl<'a, K, C: ChildList> TreeDisplay<'a, K, C> {
    pub(crate) fn new(trie: &'a Trie<K, C>, style: RenderStyle) -> Self {
        TreeDisplay { trie, style }
    }
}

impl<'a, K, C> TreeDisplay<'a, K, C>
where
    K: AsRef<str>,
    C: ChildList,
{
    fn write_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        node: &Node<K, C>,
        prefix: &mut String,
        is_last: bool,
    ) -> fmt::Result {
        f.write_str(prefix)?;
        f.write_str(self.style.connector(is_last))?;
        match (node.character, &node.payload) {
            (Some(character), Some(key)) => write!(f, "({}) {}", character, key.as_ref())?,
            (Some(character), None) => write!(f, "{}", character)?,
            (None, _) => {}
        }
        f.write_str("\n")?;

        let depth = prefix.len();
        prefix.push_str(self.style.indent(is_last));

        let count = node.children_len();
        for index in 0..count {
            if let Some(child) = node.get_child(index) {
                self.write_node(f, self.trie.node(child), prefix, index + 1 == count)?;
            }
        }

        prefix.truncate(depth);
        Ok(())
    }
}

impl<'a, K, C> fmt::Display for TreeDisplay<'a, K, C>
where
    K: AsRef<str>,
    C: ChildList,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut prefix = String::new();
        self.write_node(f, self.trie.root(), &mut prefix, true)
    }
}

impl<K, C> fmt::Display for Trie<K, C>
where
    K: AsRef<str>,
    C: ChildList,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(RenderStyle::default()), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::children::SortedChildren;

    #[test]
    fn test_render_empty() {
        let trie = Trie::<String>::new();
        assert_eq!(trie.render(), "└── \n");
    }

    #[test]
    fn test_render_shared_prefixes() {
        let trie = Trie::<&str>::from_keys(vec!["car", "cart", "cat"]).unwrap();

        let expected = concat!(
            "└── \n",
            "    └── c\n",
            "        └── a\n",
            "            ├── (r) car\n",
            "            │   └── (t) cart\n",
            "            └── (t) cat\n",
        );
        assert_eq!(trie.render(), expected);
        assert_eq!(trie.to_string(), expected);
    }

    #[test]
    fn test_render_siblings_at_root() {
        let trie = Trie::<&str>::from_keys(vec!["ab", "b"]).unwrap();

        let expected = concat!(
            "└── \n",
            "    ├── a\n",
            "    │   └── (b) ab\n",
            "    └── (b) b\n",
        );
        assert_eq!(trie.render(), expected);
    }

    #[test]
    fn test_render_ascii() {
        let trie = Trie::<&str>::from_keys(vec!["ab", "ac", "d"]).unwrap();

        let expected = concat!(
            "`-- \n",
            "    |-- a\n",
            "    |   |-- (b) ab\n",
            "    |   `-- (c) ac\n",
            "    `-- (d) d\n",
        );
        assert_eq!(trie.render_with(RenderStyle::Ascii), expected);
    }

    #[test]
    fn test_render_follows_child_order() {
        let mut trie = Trie::<&str, SortedChildren>::new();
        trie.add("b").unwrap();
        trie.add("a").unwrap();

        assert_eq!(trie.render(), "└── \n    ├── (a) a\n    └── (b) b\n");
    }

    #[test]
    fn test_render_after_pruning() {
        let mut trie = Trie::<&str>::from_keys(vec!["cart", "dog"]).unwrap();
        trie.remove("cart").unwrap();

        let expected = concat!(
            "└── \n",
            "    └── d\n",
            "        └── o\n",
            "            └── (g) dog\n",
        );
        assert_eq!(trie.render(), expected);
    }
}
