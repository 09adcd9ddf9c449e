//! This crate exposes a plain, unbalanced Binary Search Tree (BST) along with the queries needed
//! to see how its shape came out.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! values. BSTs are typically defined recursively using the notion of a `Node`. A `Node` stores
//! the value that was inserted and may have up to two child `Node`s. The invariant that makes it
//! a _search_ tree is:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a value less than or
//!    equal to its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a value greater than
//!    or equal to its own value.
//!
//! Equal values are always sent right when inserting, so a value that is inserted twice ends up
//! in the right subtree of its first copy.
//!
//! Searching takes `O(depth)` where `depth` is the number of levels on the longest path from the
//! root `Node` to a leaf `Node`. This tree does not rebalance itself, so inserting sorted values
//! produces a chain whose depth equals its size. [`BinaryTree::balance`] reports how lopsided the
//! root is without correcting it.
//!
//! ```
//! use unbalanced_bst::BinaryTree;
//!
//! let tree: BinaryTree<_> = [1, 2, 3, 4, 5].into_iter().collect();
//!
//! assert_eq!(tree.size(), 5);
//! assert_eq!(tree.depth(), 5);
//! assert_eq!(tree.balance(), -4);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod binary_tree;

pub use binary_tree::{BinaryTree, Node};
