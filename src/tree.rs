//! The core tree. A [`Tree`] owns an optional root [`Node`] and every `Node`
//! exclusively owns its children, so the whole structure is a simple ownership
//! tree with no sharing and no parent pointers.
//!
//! Insertion and deletion each come in two flavors, an iterative one and a
//! recursive one. The iterative ones walk a mutable cursor over child links
//! (the link a node hangs from doubles as its parent reference); the recursive
//! ones thread the same information through the call stack. Both flavors of
//! `insert` produce identical shapes for identical call sequences, and both
//! flavors of `delete` leave equivalent trees.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::from_collection([3, 1, 4, 1, 5, 9, 2, 6]);
//!
//! // Duplicates were dropped and the tree is height-minimal.
//! assert!(tree.is_balanced());
//!
//! let mut keys = Vec::new();
//! tree.in_order(|node| keys.push(*node.key()));
//! assert_eq!(keys, [1, 2, 3, 4, 5, 6, 9]);
//!
//! // Deleting a key that isn't there is a quiet no-op.
//! assert!(!tree.delete(&7));
//! assert!(tree.delete(&4));
//! assert!(tree.find(&4).is_none());
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::vec::IntoIter;

type Link<K> = Option<Box<Node<K>>>;

/// One stored key together with its two optional subtrees. Everything in the
/// left subtree compares less than the key, everything in the right subtree
/// compares greater.
#[derive(Debug)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// This node's left child, if it has one.
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// This node's right child, if it has one.
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// The height of the subtree rooted here, counted in edges: a node with
    /// no children has height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_collection([1, 2, 3]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.height(), 1);
    /// assert_eq!(root.left().unwrap().height(), 0);
    /// ```
    pub fn height(&self) -> isize {
        let left = self.left.as_deref().map_or(-1, Node::height);
        let right = self.right.as_deref().map_or(-1, Node::height);
        left.max(right) + 1
    }
}

/// A Binary Search Tree storing a set of unique, totally-ordered keys.
///
/// Mutation happens in place. Inserting a key that is already present and
/// deleting a key that isn't are both defined no-ops rather than errors, so
/// the tree always holds a duplicate-free set.
#[derive(Debug)]
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_collection(iter)
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a height-minimal tree from an arbitrary collection of keys.
    /// The input may be unsorted and may contain duplicates; one node is
    /// created per distinct key and the resulting height is ⌊log2 n⌋.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_collection([5, 3, 5, 1]);
    ///
    /// let mut keys = Vec::new();
    /// tree.in_order(|node| keys.push(*node.key()));
    /// assert_eq!(keys, [1, 3, 5]);
    /// ```
    pub fn from_collection<I>(keys: I) -> Self
    where
        K: Ord,
        I: IntoIterator<Item = K>,
    {
        let mut keys: Vec<K> = keys.into_iter().collect();
        keys.sort_unstable();
        keys.dedup();

        let len = keys.len();
        Self {
            root: Self::build_sorted(&mut keys.into_iter(), len),
        }
    }

    /// Consumes `len` keys from a sorted, deduplicated sequence and builds a
    /// height-minimal subtree over them. The root takes the lower-middle key,
    /// so the left subtree gets `(len - 1) / 2` keys and the right subtree
    /// gets `len / 2`. An empty range is an absent subtree.
    fn build_sorted(keys: &mut IntoIter<K>, len: usize) -> Link<K> {
        if len == 0 {
            return None;
        }

        let left = Self::build_sorted(keys, (len - 1) / 2);
        let key = match keys.next() {
            Some(key) => key,
            None => unreachable!("`build_sorted` saw `len` exceed the remaining keys."),
        };
        let right = Self::build_sorted(keys, len / 2);

        Some(Box::new(Node { key, left, right }))
    }

    /// A view of the root node, or `None` for the empty tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts a key, keeping the set duplicate-free. Returns `true` if the
    /// key was newly added and `false` if it was already present (in which
    /// case the tree is untouched).
    ///
    /// This is the iterative flavor: it descends a cursor over child links
    /// until it either hits the key or falls off the tree into the empty slot
    /// where the new node belongs.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            cur = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }

        *cur = Some(Box::new(Node::new(key)));
        true
    }

    /// Recursive flavor of [`insert`][Tree::insert]. Behaves identically and
    /// builds the identical shape for the same sequence of calls.
    pub fn insert_recursive(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        Self::insert_link(&mut self.root, key)
    }

    fn insert_link(link: &mut Link<K>, key: K) -> bool
    where
        K: Ord,
    {
        match link {
            None => {
                *link = Some(Box::new(Node::new(key)));
                true
            }
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::insert_link(&mut node.left, key),
                Ordering::Greater => Self::insert_link(&mut node.right, key),
                Ordering::Equal => false,
            },
        }
    }

    /// Deletes a key. Returns `true` if the key was present and `false` if
    /// there was nothing to delete (the tree is untouched).
    ///
    /// This is the iterative flavor: the cursor over child links plays the
    /// role of a parent pointer, so no upward references are ever stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::from_collection([1, 2, 3]);
    /// assert!(tree.delete(&2));
    /// assert!(!tree.delete(&2));
    /// assert!(tree.find(&2).is_none());
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut cur = &mut self.root;
        loop {
            let ordering = match cur.as_deref() {
                None => return false,
                Some(node) => key.cmp(&node.key),
            };
            match ordering {
                Ordering::Equal => break,
                Ordering::Less => {
                    if let Some(node) = cur {
                        cur = &mut node.left;
                    }
                }
                Ordering::Greater => {
                    if let Some(node) = cur {
                        cur = &mut node.right;
                    }
                }
            }
        }

        Self::splice(cur);
        true
    }

    /// Recursive flavor of [`delete`][Tree::delete]. Leaves an equivalent
    /// tree: the same key set, satisfying the same invariants, though the
    /// physical shape after a two-child deletion may differ from the
    /// iterative flavor's.
    pub fn delete_recursive(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        Self::delete_link(&mut self.root, key)
    }

    fn delete_link(link: &mut Link<K>, key: &K) -> bool
    where
        K: Ord,
    {
        let node = match link {
            None => return false,
            Some(node) => node,
        };
        match key.cmp(&node.key) {
            Ordering::Less => Self::delete_link(&mut node.left, key),
            Ordering::Greater => Self::delete_link(&mut node.right, key),
            Ordering::Equal => {
                Self::splice(link);
                true
            }
        }
    }

    /// Removes the node owned by `link` while preserving both its subtrees.
    ///
    /// With zero or one child the link is simply rewired to the sole child
    /// (or to nothing). With two children the in-order successor, the
    /// leftmost node of the right subtree, is popped from its slot and
    /// re-rooted here; by construction it has no left child, compares greater
    /// than everything in the old left subtree, and compares less than the
    /// rest of the right subtree, so ordering is preserved.
    fn splice(link: &mut Link<K>) {
        let mut node = match link.take() {
            None => return,
            Some(node) => node,
        };

        *link = match (node.left.take(), node.right.take()) {
            (None, right) => right,
            (left, None) => left,
            (left, Some(right)) => {
                let mut right = Some(right);
                let mut successor = match Self::pop_min(&mut right) {
                    Some(successor) => successor,
                    None => unreachable!("`splice` saw a non-empty right subtree with no minimum."),
                };
                successor.left = left;
                successor.right = right;
                Some(successor)
            }
        };
    }

    /// Unlinks and returns the smallest node of the subtree hanging from
    /// `link`, reattaching that node's right child in its place.
    fn pop_min(mut link: &mut Link<K>) -> Option<Box<Node<K>>> {
        while link.as_deref().map_or(false, |node| node.left.is_some()) {
            if let Some(node) = link {
                link = &mut node.left;
            }
        }

        let mut min = link.take()?;
        *link = min.right.take();
        Some(min)
    }

    /// Looks a key up, returning a view of its node or `None` if the key is
    /// absent. Iterative, `O(height)` comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_collection([1, 2, 3]);
    /// assert_eq!(tree.find(&3).map(|node| *node.key()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    /// Recursive flavor of [`find`][Tree::find].
    pub fn find_recursive(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        Self::find_node(self.root.as_deref(), key)
    }

    fn find_node<'a>(node: Option<&'a Node<K>>, key: &K) -> Option<&'a Node<K>>
    where
        K: Ord,
    {
        let node = node?;
        match key.cmp(&node.key) {
            Ordering::Less => Self::find_node(node.left.as_deref(), key),
            Ordering::Greater => Self::find_node(node.right.as_deref(), key),
            Ordering::Equal => Some(node),
        }
    }

    /// Visits every node breadth-first, root first, driven by an explicit
    /// FIFO queue. Both children of a node are enqueued, left then right,
    /// before the callback runs on it. A no-op on the empty tree.
    pub fn level_order<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<K>),
    {
        let mut queue = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back(root);
        }

        while let Some(node) = queue.pop_front() {
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
            visit(node);
        }
    }

    /// Visits every node depth-first: left subtree, node, right subtree.
    /// Keys are therefore visited in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_collection([2, 3, 1]);
    /// let mut keys = Vec::new();
    /// tree.in_order(|node| keys.push(*node.key()));
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<K>),
    {
        Self::in_order_node(self.root.as_deref(), &mut visit);
    }

    fn in_order_node<F>(node: Option<&Node<K>>, visit: &mut F)
    where
        F: FnMut(&Node<K>),
    {
        if let Some(node) = node {
            Self::in_order_node(node.left.as_deref(), visit);
            visit(node);
            Self::in_order_node(node.right.as_deref(), visit);
        }
    }

    /// Visits every node depth-first: node, left subtree, right subtree.
    pub fn pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<K>),
    {
        Self::pre_order_node(self.root.as_deref(), &mut visit);
    }

    fn pre_order_node<F>(node: Option<&Node<K>>, visit: &mut F)
    where
        F: FnMut(&Node<K>),
    {
        if let Some(node) = node {
            visit(node);
            Self::pre_order_node(node.left.as_deref(), visit);
            Self::pre_order_node(node.right.as_deref(), visit);
        }
    }

    /// Visits every node depth-first: left subtree, right subtree, node.
    pub fn post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&Node<K>),
    {
        Self::post_order_node(self.root.as_deref(), &mut visit);
    }

    fn post_order_node<F>(node: Option<&Node<K>>, visit: &mut F)
    where
        F: FnMut(&Node<K>),
    {
        if let Some(node) = node {
            Self::post_order_node(node.left.as_deref(), visit);
            Self::post_order_node(node.right.as_deref(), visit);
            visit(node);
        }
    }

    /// The height of the whole tree in edges. The empty tree has height −1
    /// and a single-node tree has height 0.
    pub fn height(&self) -> isize {
        self.root.as_deref().map_or(-1, Node::height)
    }

    /// The number of edges between the root and the node holding the given
    /// node's key, found by re-searching from the root (nodes store no parent
    /// pointers). Returns −1 if the key is not on its search path.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_collection([1, 2, 3]);
    /// let leaf = tree.find(&3).unwrap();
    /// assert_eq!(tree.depth(leaf), 1);
    /// ```
    pub fn depth(&self, node: &Node<K>) -> isize
    where
        K: Ord,
    {
        let mut cur = self.root.as_deref();
        let mut depth = 0;
        while let Some(current) = cur {
            match node.key.cmp(&current.key) {
                Ordering::Equal => return depth,
                Ordering::Less => cur = current.left.as_deref(),
                Ordering::Greater => cur = current.right.as_deref(),
            }
            depth += 1;
        }
        -1
    }

    /// Whether every node's left and right subtree heights differ by at most
    /// one. Computed in a single bottom-up pass that short-circuits the
    /// moment any subtree is found unbalanced, so the whole check is `O(n)`.
    pub fn is_balanced(&self) -> bool {
        Self::balanced_height(self.root.as_deref()).is_some()
    }

    /// Returns the subtree height, or `None` as the "unbalanced" tag that
    /// propagates straight up through the `?`s.
    fn balanced_height(node: Option<&Node<K>>) -> Option<isize> {
        let node = match node {
            None => return Some(-1),
            Some(node) => node,
        };

        let left = Self::balanced_height(node.left.as_deref())?;
        let right = Self::balanced_height(node.right.as_deref())?;
        if (left - right).abs() > 1 {
            return None;
        }
        Some(left.max(right) + 1)
    }

    /// Rebuilds the tree into a height-minimal one over the same key set.
    /// The in-order drain already yields the keys sorted and deduplicated, so
    /// the old node graph is discarded and rebuilt directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in 1..=5 {
    ///     tree.insert(key);
    /// }
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn rebalance(&mut self) {
        let mut keys = Vec::new();
        Self::drain_in_order(self.root.take(), &mut keys);

        let len = keys.len();
        self.root = Self::build_sorted(&mut keys.into_iter(), len);
    }

    fn drain_in_order(link: Link<K>, keys: &mut Vec<K>) {
        if let Some(node) = link {
            let node = *node;
            Self::drain_in_order(node.left, keys);
            keys.push(node.key);
            Self::drain_in_order(node.right, keys);
        }
    }
}
