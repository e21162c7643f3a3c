//! This crate exposes [`OrderedTree`], an ordered container built on a plain (unbalanced)
//! Binary Search Tree that can also be indexed by sorted position.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores each value in a `Node` which may have a left and a right
//! child. The invariants that make it useful are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value less than its own.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value greater than or
//!    equal to its own. Whether equal values are kept at all is up to the tree's
//!    [`DuplicatePolicy`].
//!
//! Membership tests take `O(height)`, and visiting the left subtree, then the subtree root,
//! then the right subtree yields every value in sorted order.
//!
//! ## Ranks
//!
//! Every `Node` also remembers how many `Node`s live in the subtree below it (itself
//! included). That count lets [`OrderedTree::at`] find the value at a given sorted position
//! in `O(height)` without walking everything before it.
//!
//! > Nothing here rebalances the tree. Inserting already sorted values gives a tree whose
//! > height equals its length, which is why no operation recurses down the tree.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{DuplicatePolicy, OrderedTree, TreeError};
//!
//! let mut tree = OrderedTree::with_policy(DuplicatePolicy::Reject);
//! for value in [5, 3, 8, 1, 4, 3] {
//!     tree.insert(value);
//! }
//!
//! assert_eq!(tree.len(), 5);
//! assert_eq!(tree.at(4), Ok(&8));
//! assert_eq!(tree.at(5), Err(TreeError::OutOfRange { index: 5, len: 5 }));
//! assert_eq!(tree.into_iter().collect::<Vec<_>>(), vec![1, 3, 4, 5, 8]);
//! ```

#![deny(missing_docs, unsafe_code)]

mod error;
mod iter;
mod node;
mod policy;
mod tree;

pub use error::{Result, TreeError};
pub use iter::{IntoIter, Iter};
pub use policy::DuplicatePolicy;
pub use tree::OrderedTree;
