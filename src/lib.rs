//! A Binary Search Tree (BST) over unique, totally-ordered keys, with
//! callback-based traversals and on-demand rebalancing.
//!
//! ## What's in the tree
//!
//! A BST stores each key in a `Node` whose left subtree holds only smaller
//! keys and whose right subtree holds only larger keys. That single ordering
//! rule is what makes everything else cheap: lookups, inserts, and deletes
//! all walk one root-to-leaf path, so they cost `O(height)` comparisons, and
//! visiting the left subtree, then a node, then its right subtree reads the
//! keys back in ascending order.
//!
//! The catch is that `height` depends on insertion order. Feeding the tree an
//! ascending run of keys degenerates it into a linked list, and `O(height)`
//! quietly becomes `O(n)`. This crate does not rebalance on every write;
//! instead it offers [`Tree::is_balanced`] to detect the degeneration and
//! [`Tree::rebalance`] to rebuild the tree at minimal height, the same
//! construction [`Tree::from_collection`] uses.
//!
//! ## Two flavors of everything structural
//!
//! `insert`, `delete`, and `find` each exist in an iterative and a recursive
//! form. They are interchangeable; both are kept because the two styles
//! resolve "where is this node's parent?" in instructively different ways
//! when no parent pointers are stored.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::from_collection([3, 1, 4, 1, 5]);
//!
//! tree.insert(2);
//! tree.delete(&4);
//!
//! let mut keys = Vec::new();
//! tree.in_order(|node| keys.push(*node.key()));
//! assert_eq!(keys, [1, 2, 3, 5]);
//! ```

#![deny(missing_docs)]

mod tree;

pub mod pretty;

pub use tree::{Node, Tree};
