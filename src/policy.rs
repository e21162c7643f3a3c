/// What [`insert`][crate::OrderedTree::insert] does with a value that compares equal to one
/// already in the tree. Chosen when the tree is built and fixed for its lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    /// Equal values go into the right subtree, so every insert adds exactly one node and
    /// duplicates sit next to each other in iteration order.
    #[default]
    Tolerate,
    /// Equal values are dropped and the tree is left untouched, giving set semantics.
    Reject,
}
