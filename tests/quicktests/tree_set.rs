use ordered_tree_set::{OrderedSet, TreeSet};

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of elements in both.
fn do_ops<T>(ops: &[Op<T>], set: &mut impl OrderedSet<T>, model: &mut HashSet<T>)
where
    T: std::hash::Hash + Eq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                let size = set.size();
                let added = set.add(x.clone());
                assert_eq!(added, model.insert(x.clone()));
                assert_eq!(set.size(), if added { size + 1 } else { size });
            }
            Op::Remove(x) => {
                let size = set.size();
                let removed = set.remove(x);
                assert_eq!(removed, model.remove(x));
                assert_eq!(set.size(), if removed { size - 1 } else { size });
                assert!(!set.contains(x));
            }
            Op::Clear => {
                set.clear();
                model.clear();
                assert!(set.is_empty());
                assert_eq!(set.size(), 0);
            }
            Op::Iter => assert!(model.iter().all(|x| set.contains(x))),
        }
        assert_eq!(set.size(), model.len());
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut set = TreeSet::new();
        let mut model = HashSet::new();

        do_ops(&ops, &mut set, &mut model);

        let mut expected: Vec<_> = model.into_iter().collect();
        expected.sort();
        set.iter().copied().eq(expected)
    }
}

quickcheck::quickcheck! {
    fn size_counts_distinct(xs: Vec<i8>) -> bool {
        let set: TreeSet<_> = xs.iter().copied().collect();
        let distinct: HashSet<_> = xs.into_iter().collect();

        set.size() == distinct.len()
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut set = TreeSet::new();
        for x in &xs {
            set.add(*x);
        }

        xs.iter().all(|x| set.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let set: TreeSet<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !set.contains(x))
    }
}

quickcheck::quickcheck! {
    fn add_is_idempotent(xs: Vec<i8>) -> bool {
        let mut set: TreeSet<_> = xs.iter().copied().collect();
        let size = set.size();

        xs.iter().all(|x| !set.add(*x)) && set.size() == size
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut set: TreeSet<_> = xs.iter().copied().collect();
        for delete in &deletes {
            set.remove(delete);
        }

        let deleted: HashSet<_> = deletes.into_iter().collect();
        let mut still_present: Vec<_> = xs
            .into_iter()
            .filter(|x| !deleted.contains(x))
            .collect();
        still_present.sort();
        still_present.dedup();

        set.iter().copied().eq(still_present)
    }
}

quickcheck::quickcheck! {
    fn clear_empties(xs: Vec<i8>) -> bool {
        let mut set: TreeSet<_> = xs.into_iter().collect();
        set.clear();

        set.is_empty() && set.size() == 0 && set.floor().is_err() && set.max().is_err()
    }
}
