//! An unbalanced BST. Each node owns its two children through a `Box` so the whole structure is a
//! plain out-tree: no parent pointers, no shared nodes, no `unsafe`.
//!
//! The shape of the tree is purely a function of insertion order. Nothing is ever rotated, so the
//! [`depth`][BinaryTree::depth] and [`balance`][BinaryTree::balance] of a tree only report how
//! lopsided the insertions made it.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::BinaryTree;
//!
//! let mut tree = BinaryTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.depth(), 0);
//!
//! tree.insert(5);
//! tree.insert(3);
//! tree.insert(8);
//!
//! assert!(tree.contains(&3));
//! assert_eq!(tree.size(), 3);
//! assert_eq!(tree.depth(), 2);
//! assert_eq!(tree.balance(), 0);
//!
//! // Duplicates are kept and routed to the right.
//! tree.insert(3);
//! assert_eq!(tree.size(), 4);
//! assert_eq!(tree.balance(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A Binary Search Tree that never rebalances. Values equal to a node's value are stored in that
/// node's right subtree, so duplicates are allowed and each one gets its own node.
#[derive(Clone)]
pub struct BinaryTree<T> {
    root: Link<T>,
    len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BinaryTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("len", &self.len)
            .field("nodes", &Preorder(self.root()))
            .finish()
    }
}

/// Lists every node of a subtree, parents before children. Each [`Node`] formats shallowly so
/// this never nests deeper than one level.
struct Preorder<'a, T>(Option<&'a Node<T>>);

impl<T> fmt::Debug for Preorder<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending: Vec<&Node<T>> = self.0.into_iter().collect();
        let mut list = f.debug_list();
        while let Some(node) = pending.pop() {
            list.entry(node);
            pending.extend(node.right());
            pending.extend(node.left());
        }
        list.finish()
    }
}

impl<T> BinaryTree<T> {
    /// Generates a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts the given value into the tree. The value is compared against each node on the way
    /// down: strictly smaller values go left and everything else, equal values included, goes
    /// right. The new node is attached at the first empty slot reached.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// let root = tree.root().unwrap();
    /// assert!(root.left().is_none());
    /// assert_eq!(root.right().map(|n| n.value()), Some(&2));
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut node = match self.root.as_deref_mut() {
            Some(root) => root,
            None => {
                self.root = Some(Node::new_boxed(value));
                self.len = 1;
                log::trace!("inserted root, tree now holds 1 node");
                return;
            }
        };

        // The root sits on level 1 so the first child attached is on level 2.
        let mut level = 2;
        loop {
            let go_left = value < node.value;
            let has_child = if go_left {
                node.left.is_some()
            } else {
                node.right.is_some()
            };
            if has_child {
                let next = if go_left {
                    &mut node.left
                } else {
                    &mut node.right
                };
                node = next.as_deref_mut().unwrap();
                level += 1;
            } else {
                let child = if go_left {
                    &mut node.left
                } else {
                    &mut node.right
                };
                *child = Some(Node::new_boxed(value));
                break;
            }
        }

        if cfg!(debug_assertions) {
            let value = &node.value;
            assert!(node.left().map_or(true, |left| left.value() <= value));
            assert!(node.right().map_or(true, |right| right.value() >= value));
            // A node on `level` has `level - 1` ancestors above it.
            assert!(self.len + 1 >= level);
        }

        self.len += 1;
        log::trace!(
            "inserted node on level {level}, tree now holds {} nodes",
            self.len
        );
    }

    /// Returns whether a node holding a value equal to `value` is in the tree. Only the nodes on
    /// the search path are visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::BinaryTree;
    ///
    /// let tree: BinaryTree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.contains(&8));
    /// assert!(!tree.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// The number of values in the tree. Every call to [`insert`][Self::insert] adds one,
    /// duplicates included.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many levels the tree has. An empty tree has a depth of 0 and a tree holding only a
    /// root has a depth of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::BinaryTree;
    ///
    /// // Sorted input degenerates into a chain.
    /// let tree: BinaryTree<_> = (1..=5).collect();
    /// assert_eq!(tree.depth(), 5);
    /// ```
    pub fn depth(&self) -> usize {
        self.root().map_or(0, Node::depth)
    }

    /// The depth of the root's left subtree minus the depth of its right subtree. Positive values
    /// mean the tree leans left. This is only measured at the root; subtrees are not inspected
    /// for their own balance.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::BinaryTree;
    ///
    /// let tree: BinaryTree<_> = (1..=5).rev().collect();
    /// assert_eq!(tree.balance(), 4);
    ///
    /// let tree: BinaryTree<_> = (1..=5).collect();
    /// assert_eq!(tree.balance(), -4);
    /// ```
    pub fn balance(&self) -> isize {
        self.root().map_or(0, Node::balance_factor)
    }

    /// The root of the tree, if anything has been inserted. Together with the accessors on
    /// [`Node`] this allows walking the tree's structure directly.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T> FromIterator<T> for BinaryTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinaryTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// A `Node` holds one inserted value and up to two children. Everything in the left subtree is
/// less than or equal to `value` and everything in the right subtree is greater than or equal to
/// it.
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of this node's left subtree.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// How many levels are in the subtree rooted at this node. A node with no children has a
    /// depth of 1.
    ///
    /// The walk keeps its own stack on the heap, so a chain of any length can be measured.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(node.left().map(|left| (left, level + 1)));
            pending.extend(node.right().map(|right| (right, level + 1)));
        }
        deepest
    }

    fn balance_factor(&self) -> isize {
        let left = self.left().map_or(0, Self::depth) as isize;
        let right = self.right().map_or(0, Self::depth) as isize;
        left - right
    }
}

impl<T> Drop for Node<T> {
    /// Dropping the `Box`es recursively would use one stack frame per level, which a tree built
    /// from sorted input can easily exhaust. Detach descendants onto a heap stack instead so each
    /// one is dropped with no children left.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Walks the subtree with an explicit stack of visits so cloning a chain does not recurse.
/// Children are finished before their parent, which then takes them off `built`.
impl<T> Clone for Node<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        enum Visit<'a, T> {
            Enter(&'a Node<T>),
            Exit(&'a Node<T>),
        }

        let mut visits = vec![Visit::Enter(self)];
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        while let Some(visit) = visits.pop() {
            match visit {
                Visit::Enter(node) => {
                    visits.push(Visit::Exit(node));
                    visits.extend(node.right().map(Visit::Enter));
                    visits.extend(node.left().map(Visit::Enter));
                }
                Visit::Exit(node) => {
                    // The left child was entered last, so it finished first and sits lower.
                    let right = node.right.as_ref().and_then(|_| built.pop());
                    let left = node.left.as_ref().and_then(|_| built.pop());
                    built.push(Box::new(Node {
                        value: node.value.clone(),
                        left,
                        right,
                    }));
                }
            }
        }

        let root = built.pop().expect("Exiting the root leaves its clone on top");
        *root
    }
}

/// Only names the children's values; use [`BinaryTree`]'s `Debug` to see every node.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Self::value))
            .field("right", &self.right().map(Self::value))
            .finish()
    }
}
