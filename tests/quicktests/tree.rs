use ordered_tree::{DuplicatePolicy, OrderedTree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a duplicate rejecting tree and a `BTreeSet`.
/// Both have set semantics so every answer should agree.
fn do_ops<T>(ops: &[Op<T>], tree: &mut OrderedTree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    ops.iter().all(|op| match op {
        Op::Insert(x) => tree.insert(x.clone()) == set.insert(x.clone()),
        Op::Contains(x) => tree.contains(x) == set.contains(x),
    })
}

quickcheck::quickcheck! {
    fn fuzz_rejecting_tree_matches_btreeset(ops: Vec<Op<i8>>) -> bool {
        let mut tree = OrderedTree::with_policy(DuplicatePolicy::Reject);
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set) && tree.iter().eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn iterates_sorted(xs: Vec<i32>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();
        let mut sorted = xs;
        sorted.sort();

        tree.into_iter().eq(sorted)
    }
}

quickcheck::quickcheck! {
    fn ranks_agree_with_iteration(xs: Vec<i32>) -> bool {
        let tree: OrderedTree<_> = xs.into_iter().collect();

        (0..tree.len()).map(|i| tree.at(i).ok()).eq(tree.iter().map(Some))
            && tree.at(tree.len()).is_err()
    }
}

quickcheck::quickcheck! {
    fn iteration_is_repeatable(xs: Vec<u8>) -> bool {
        let tree: OrderedTree<_> = xs.into_iter().collect();

        tree.iter().eq(tree.iter())
    }
}
