//! In-order iterators. Both keep an explicit stack of the nodes whose left subtree has been
//! handed out but whose own value and right subtree haven't, so the traversal never recurses
//! no matter how lopsided the tree is.

use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// A lazy, borrowing iterator over the values of an [`OrderedTree`][crate::OrderedTree] in
/// ascending order.
///
/// Created by [`OrderedTree::iter`][crate::OrderedTree::iter]. Cloning it forks the traversal
/// at the current position.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

/// Manual implementation of `Clone` so `T` doesn't need to be `Clone` itself.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_leftmost_path(root);
        iter
    }

    /// Walks left from `node` pushing everything on the way, which leaves the smallest value
    /// of that subtree on top of the stack.
    fn push_leftmost_path(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_leftmost_path(node.right());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the values of an [`OrderedTree`][crate::OrderedTree] in ascending
/// order.
///
/// Created by `into_iter` on the tree. Nodes are detached from their left child as they are
/// stacked, so dropping a half-consumed `IntoIter` frees the rest one node at a time.
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_leftmost_path(root);
        iter
    }

    fn push_leftmost_path(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_leftmost_path(node.right.take());
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Stacked nodes still own their right subtrees; drain instead of letting `Box` drop
        // them recursively.
        for _ in self.by_ref() {}
    }
}
