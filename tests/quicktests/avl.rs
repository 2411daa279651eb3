use avl_set::avl::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                tree.remove(k);
                set.remove(k);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn lower_bound_after_operations(ops: Vec<Op<i16>>, queries: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    queries
        .iter()
        .all(|q| tree.lower_bound(q) == set.range(q..).next())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.lower_bound(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for remove in &removes {
        tree.remove(remove);
    }

    let mut still_present = xs;
    still_present.retain(|x| !removes.contains(x));

    removes.iter().all(|x| tree.lower_bound(x) != Some(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>) -> bool {
    let once: Tree<_> = xs.iter().copied().collect();
    let mut twice = once.clone();
    twice.extend(xs.iter().copied());

    once.len() == twice.len() && once.iter().eq(twice.iter())
}

#[quickcheck]
fn remove_is_idempotent(xs: Vec<i8>, k: i8) -> bool {
    let mut once: Tree<_> = xs.iter().copied().collect();
    once.remove(&k);
    let mut twice = once.clone();
    twice.remove(&k);

    once.len() == twice.len() && once.iter().eq(twice.iter())
}

#[test]
fn ascending_inserts_stay_shallow() {
    let tree: Tree<_> = (1..=7).collect();

    assert_eq!(tree.height(), 3);
}

#[test]
fn removing_from_an_empty_tree() {
    let mut tree: Tree<i32> = Tree::new();

    tree.remove(&42);

    assert!(tree.is_empty());
    assert_eq!(tree.lower_bound(&42), None);
}
