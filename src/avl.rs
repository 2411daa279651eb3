//! An owned AVL tree used as an ordered set. Every subtree is an
//! `Option<Box<Node>>` owned by its parent; operations that restructure the
//! tree take a subtree by value and hand back its (possibly new) root, so no
//! node ever needs to know about its parent.
//!
//! # Examples
//!
//! ```
//! use avl_set::avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.lower_bound(&1), None);
//!
//! tree.insert(5);
//! tree.insert(3);
//! tree.insert(8);
//!
//! // The smallest key that is at least the query.
//! assert_eq!(tree.lower_bound(&4), Some(&5));
//! assert_eq!(tree.lower_bound(&5), Some(&5));
//!
//! // Removing a key lets the query fall through to the next one.
//! tree.remove(&5);
//! assert_eq!(tree.lower_bound(&4), Some(&8));
//! assert_eq!(tree.lower_bound(&9), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::trace;

/// An owned, possibly empty, subtree.
type Link<K> = Option<Box<Node<K>>>;

/// A self-balancing Binary Search Tree (specifically, an AVL tree) storing a set of unique keys.
/// This can be used for inserting and removing keys and for finding the smallest stored key that
/// is greater than or equal to some other key.
#[derive(Clone)]
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns how many keys are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree stores no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of levels in the tree. An empty tree has a height of 0 and a tree with
    /// only a root has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::avl::Tree;
    ///
    /// // Ascending inserts would make a chain of 7 levels without rebalancing.
    /// let tree: Tree<_> = (1..=7).collect();
    ///
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            stack: Vec::with_capacity(self.height()),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Inserts the given key into the tree. Inserting a key that is already present does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(10);
    /// tree.insert(10);
    ///
    /// assert_eq!(tree.len(), 1);
    /// assert!(tree.contains(&10));
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let (root, inserted) = Node::insert(self.root.take(), key);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
    }

    /// Removes the given key from the tree. If the tree does not contain the key, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// tree.remove(&1);
    /// assert!(!tree.contains(&1));
    ///
    /// // Removing it again is fine.
    /// tree.remove(&1);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K)
    where
        K: Ord,
    {
        let (root, removed) = Node::remove(self.root.take(), key);
        self.root = root;
        if removed {
            self.len -= 1;
        }
    }

    /// Finds the smallest key in the tree that is greater than or equal to the given key. If every
    /// stored key is smaller, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_set::avl::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.lower_bound(&4), Some(&4));
    /// assert_eq!(tree.lower_bound(&6), Some(&8));
    /// assert_eq!(tree.lower_bound(&9), None);
    /// ```
    pub fn lower_bound(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        let mut best = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match node.key.cmp(key) {
                // Nothing on the left can be large enough.
                Ordering::Less => current = node.right.as_deref(),
                Ordering::Equal => return Some(&node.key),
                // A candidate, but there may be a smaller one on the left.
                Ordering::Greater => {
                    best = Some(&node.key);
                    current = node.left.as_deref();
                }
            }
        }
        best
    }

    /// Returns `true` if the tree contains the given key.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.lower_bound(key) == Some(key)
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over the keys of a [`Tree`]. The stack holds the nodes whose keys have not
/// been yielded yet but whose left subtrees have been fully visited (or are about to be).
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

/// Gets the height of a subtree. An empty subtree has a height of 0.
fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

#[derive(Clone)]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// Left height minus right height. Positive when the node leans left.
    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Inserts `key` into the subtree and returns the new subtree root along with whether a node
    /// was created for it.
    fn insert(link: Link<K>, key: K) -> (Box<Self>, bool)
    where
        K: Ord,
    {
        let Some(mut node) = link else {
            return (Self::new_boxed(key), true);
        };

        let inserted = match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, inserted) = Self::insert(node.left.take(), key);
                node.left = Some(left);
                inserted
            }
            Ordering::Equal => return (node, false),
            Ordering::Greater => {
                let (right, inserted) = Self::insert(node.right.take(), key);
                node.right = Some(right);
                inserted
            }
        };

        (node.balance(), inserted)
    }

    /// Removes `key` from the subtree and returns the new subtree root along with whether a node
    /// was dropped.
    fn remove(link: Link<K>, key: &K) -> (Link<K>, bool)
    where
        K: Ord,
    {
        let Some(mut node) = link else {
            return (None, false);
        };

        match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, removed) = Self::remove(node.left.take(), key);
                node.left = left;
                (Some(node.balance()), removed)
            }
            Ordering::Greater => {
                let (right, removed) = Self::remove(node.right.take(), key);
                node.right = right;
                (Some(node.balance()), removed)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => (None, true),
                (Some(child), None) | (None, Some(child)) => (Some(child), true),

                // With two children we promote this node's in-order successor. That is, the
                // smallest key in its right subtree. The successor's own node is the one that
                // gets dropped.
                (Some(left), Some(right)) => {
                    let (new_right, successor) = right.remove_smallest();
                    node.key = successor;
                    node.left = Some(left);
                    node.right = new_right;
                    (Some(node.balance()), true)
                }
            },
        }
    }

    /// Detaches the smallest key of this subtree and returns it with the rebalanced remainder.
    fn remove_smallest(mut self: Box<Self>) -> (Link<K>, K) {
        match self.left.take() {
            None => {
                let Self { key, right, .. } = *self;
                (right, key)
            }
            Some(left) => {
                let (new_left, smallest) = left.remove_smallest();
                self.left = new_left;
                (Some(self.balance()), smallest)
            }
        }
    }

    /// Rotate self to the right. This moves the left child up vertically and self down
    /// vertically. Used to rebalance the tree when the left child is too tall. Without a left
    /// child there is nothing to rotate and the node is returned as is.
    ///
    /// ```text
    ///      old_root              new_root
    ///       /     \              /     \
    ///   new_root   z   rotate ->  x   old_root
    ///    /  \                          /  \
    ///   x    y                        y    z
    /// ```
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.left.take() else {
            return self;
        };

        self.left = new_root.right.take();
        // The old root is now the lower node so it must be fixed first.
        self.fix_height();
        new_root.right = Some(self);
        new_root.fix_height();
        new_root
    }

    /// Mirror image of [`Node::rotate_right`]: the right child moves up.
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.right.take() else {
            return self;
        };

        self.right = new_root.left.take();
        self.fix_height();
        new_root.left = Some(self);
        new_root.fix_height();
        new_root
    }

    /// Fixes this node's height and, if its children's heights differ by more than one, rotates
    /// to restore the AVL invariant. Returns the root of the rebalanced subtree.
    ///
    /// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
    fn balance(mut self: Box<Self>) -> Box<Self> {
        self.fix_height();
        let balance_factor = self.balance_factor();

        let return_node = if balance_factor > 1 {
            if self.left.as_ref().map_or(0, |n| n.balance_factor()) < 0 {
                trace!("left-right rotation (balance factor {})", balance_factor);
                self.left = self.left.take().map(Self::rotate_left);
            } else {
                trace!("right rotation (balance factor {})", balance_factor);
            }
            self.rotate_right()
        } else if balance_factor < -1 {
            if self.right.as_ref().map_or(0, |n| n.balance_factor()) > 0 {
                trace!("right-left rotation (balance factor {})", balance_factor);
                self.right = self.right.take().map(Self::rotate_right);
            } else {
                trace!("left rotation (balance factor {})", balance_factor);
            }
            self.rotate_left()
        } else {
            self
        };

        if cfg!(debug_assertions) {
            let left_height = height(&return_node.left);
            let right_height = height(&return_node.right);
            assert_eq!(return_node.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
        return_node
    }
}
