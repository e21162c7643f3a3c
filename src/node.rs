/// A child pointer. `None` marks the empty spot at the bottom of a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single node. Children are uniquely owned and there is no parent pointer.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many nodes are in the subtree rooted at this node, itself included.
    pub(crate) size: usize,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            size: 1,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The number of nodes preceding this one within its own subtree.
    pub(crate) fn left_size(&self) -> usize {
        self.left().map_or(0, |n| n.size)
    }
}
