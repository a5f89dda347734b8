//! A human-readable rendering of a tree, for debugging and demos.
//!
//! This module is presentation only. It consumes the public node views
//! ([`Tree::root`], [`Node::left`], [`Node::right`], [`Node::key`]) and the
//! core never depends on it.

use std::fmt::{Display, Write};

use crate::{Node, Tree};

/// Renders a tree with box-drawing connectors, one node per line: the right
/// subtree is drawn above its parent and the left subtree below, each level
/// indented one step further.
///
/// # Examples
///
/// ```
/// use bstree::{pretty, Tree};
///
/// let tree = Tree::from_collection([1, 2, 3]);
/// let expected = "\
/// │   ┌── 3
/// └── 2
///     └── 1
/// ";
/// assert_eq!(pretty::render(&tree), expected);
/// ```
pub fn render<K: Display>(tree: &Tree<K>) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root() {
        render_node(root, "", true, &mut out);
    }
    out
}

fn render_node<K: Display>(node: &Node<K>, prefix: &str, is_left: bool, out: &mut String) {
    if let Some(right) = node.right() {
        let deeper = format!("{prefix}{}", if is_left { "│   " } else { "    " });
        render_node(right, &deeper, false, out);
    }

    let connector = if is_left { "└── " } else { "┌── " };
    // Writing into a String never fails.
    let _ = writeln!(out, "{prefix}{connector}{}", node.key());

    if let Some(left) = node.left() {
        let deeper = format!("{prefix}{}", if is_left { "    " } else { "│   " });
        render_node(left, &deeper, true, out);
    }
}
