//! This crate exposes an ordered set built on a self-balancing Binary Search
//! Tree, plus a small driver that answers queries against it.
//!
//! ## AVL Tree
//!
//! A Binary Search Tree stores its keys in `Node`s such that, for every
//! `Node`, all the keys in its left subtree are smaller than its own key and
//! all the keys in its right subtree are larger. Finding a key, or the
//! smallest key at least as large as some other key, then takes
//! `O(height)` (where `height` is the longest path from the root `Node` to a
//! leaf `Node`).
//!
//! An AVL tree additionally keeps, for every `Node`, the heights of its two
//! subtrees within one of each other. Whenever an insert or remove breaks
//! that, the affected `Node`s are rotated on the way back up to the root.
//! This limits the height to about `1.44 lg N` where `N` is the number of
//! keys, so every operation is `O(lg N)`.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! See [`avl::Tree`] for the set itself and [`query`] for the driver.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod query;
