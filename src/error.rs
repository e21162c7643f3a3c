/// Errors returned by rank based lookups on an [`OrderedTree`][crate::OrderedTree].
///
/// Insertion and membership tests never fail, so this only covers indexing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The tree has no nodes so there is nothing to index into.
    #[error("cannot index into an empty tree")]
    Empty,
    /// The requested rank is not smaller than the number of values in the tree.
    #[error("rank {index} is out of range for a tree of {len} values")]
    OutOfRange {
        /// The requested zero-based rank.
        index: usize,
        /// How many values the tree held at the time.
        len: usize,
    },
}

/// Shorthand for results carrying a [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_rank() {
        let err = TreeError::OutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "rank 7 is out of range for a tree of 3 values"
        );
        assert_eq!(
            TreeError::Empty.to_string(),
            "cannot index into an empty tree"
        );
    }
}
