//! The tree itself. Every walk here (insert, lookup, ranking, dropping) is a loop rather than
//! a recursion since nothing keeps the tree balanced: feeding it sorted input produces a
//! chain as deep as the tree is long.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert!(tree.at(0).is_err());
//!
//! for value in [5, 3, 8, 1, 4] {
//!     tree.insert(value);
//! }
//!
//! assert!(tree.contains(&4));
//! assert_eq!(tree.at(0), Ok(&1));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 8]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use tracing::{debug, trace};

use crate::error::{Result, TreeError};
use crate::iter::{IntoIter, Iter};
use crate::node::{Link, Node};
use crate::policy::DuplicatePolicy;

/// An unbalanced Binary Search Tree which tracks subtree sizes so values can also be looked
/// up by their position in sorted order.
pub struct OrderedTree<T> {
    root: Link<T>,
    policy: DuplicatePolicy,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        // `Box` would drop a chain of nodes recursively, one stack frame per node.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree` which accepts duplicate values.
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    /// Generates a new, empty `OrderedTree` handling equal values according to `policy`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{DuplicatePolicy, OrderedTree};
    ///
    /// let mut tree = OrderedTree::with_policy(DuplicatePolicy::Reject);
    ///
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self { root: None, policy }
    }

    /// Generates a tree holding just `value`.
    pub fn singleton(value: T) -> Self {
        Self {
            root: Some(Node::new_boxed(value)),
            policy: DuplicatePolicy::default(),
        }
    }

    /// The policy this tree was built with.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.root().map_or(0, |n| n.size)
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many nodes lie on the longest path from the root down to a leaf. An empty tree has
    /// a depth of 0 and a tree built from sorted input has a depth equal to its length.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        deepest
    }

    /// Inserts `value` into the tree and reports whether a node was added.
    ///
    /// Values equal to one already present go to its right under
    /// [`DuplicatePolicy::Tolerate`] and are discarded under [`DuplicatePolicy::Reject`], in
    /// which case nothing about the tree changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(5);
    /// tree.insert(5);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&5, &5]);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        // Sizes are bumped on the way down, so a rejection has to be known up front.
        if self.policy == DuplicatePolicy::Reject && self.contains(&value) {
            debug!(len = self.len(), "rejected duplicate value");
            return false;
        }

        let mut depth = 0;
        let mut link = &mut self.root;
        while let Some(node) = link {
            node.size += 1;
            depth += 1;
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Node::new_boxed(value));

        trace!(depth, len = self.len(), "attached new node");
        true
    }

    /// Checks whether a value equal to `value` is somewhere in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
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

    /// Returns the value at zero-based position `index` in sorted order.
    ///
    /// Runs in `O(depth)` by steering with the subtree sizes instead of counting nodes.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] if the tree has no values and [`TreeError::OutOfRange`] if
    /// `index` is not smaller than [`len`][Self::len]. The tree is never modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, TreeError};
    ///
    /// let tree: OrderedTree<_> = [30, 10, 20].into_iter().collect();
    ///
    /// assert_eq!(tree.at(1), Ok(&20));
    /// assert_eq!(tree.at(3), Err(TreeError::OutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.len();
        if len == 0 {
            debug!(index, "indexed into an empty tree");
            return Err(TreeError::Empty);
        }
        if index >= len {
            debug!(index, len, "rank out of range");
            return Err(TreeError::OutOfRange { index, len });
        }

        // `offset` is the number of values sorting before everything under `current`.
        let mut offset = 0;
        let mut current = self.root();
        while let Some(node) = current {
            let rank = offset + node.left_size();
            current = match index.cmp(&rank) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Ok(&node.value),
                Ordering::Greater => {
                    offset = rank + 1;
                    node.right()
                }
            };
        }

        // Unreachable while the sizes are consistent.
        Err(TreeError::OutOfRange { index, len })
    }

    /// Gets a lazy iterator over the values in ascending order. Each call starts over from the
    /// smallest value.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.len())
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

/// Indexes into the tree by sorted position.
///
/// # Panics
///
/// Panics wherever [`OrderedTree::at`] would return an error.
///
/// # Examples
///
/// ```
/// use ordered_tree::OrderedTree;
///
/// let tree: OrderedTree<_> = [10, 30, 20].into_iter().collect();
/// assert_eq!(tree[2], 30);
/// ```
impl<T> Index<usize> for OrderedTree<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for OrderedTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len();
        IntoIter::new(self.root.take(), len)
    }
}
