//! Property tests: arbitrary insert/delete sequences against a `BTreeSet` model

mod common;

use std::collections::BTreeSet;

use avl_core::{max_height_for, AvlTree, ReverseOrder, TreeConfig};
use common::{assert_balanced, balance_factors, init_tracing};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(i16),
    Remove(i16),
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    // Narrow key range so removals and duplicates actually hit
    proptest::collection::vec(
        prop_oneof![
            3 => (-64i16..64).prop_map(Op::Insert),
            2 => (-64i16..64).prop_map(Op::Remove),
        ],
        0..200,
    )
}

proptest! {
    #[test]
    fn matches_model_after_every_op(ops in ops()) {
        init_tracing();
        let mut tree = AvlTree::with_config(TreeConfig::debug());
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    prop_assert_eq!(tree.insert(key), model.insert(key));
                }
                Op::Remove(key) => {
                    prop_assert_eq!(tree.remove(&key), model.remove(&key));
                }
            }

            prop_assert!(balance_factors(tree.root()).iter().all(|bf| (-1..=1).contains(bf)));
            prop_assert_eq!(tree.len(), model.len());
            prop_assert!(tree.height() <= max_height_for(tree.len()));
        }

        let expected: Vec<i16> = model.iter().copied().collect();
        prop_assert_eq!(tree.inorder(), expected);
        prop_assert_eq!(tree.min().ok(), model.first());
        prop_assert_eq!(tree.max().ok(), model.last());
        for key in -64i16..64 {
            prop_assert_eq!(tree.search(&key), model.contains(&key));
        }
    }

    #[test]
    fn height_bound_after_inserts(keys in proptest::collection::vec(any::<u32>(), 0..500)) {
        let tree: AvlTree<u32> = keys.iter().copied().collect();
        let distinct: BTreeSet<u32> = keys.into_iter().collect();

        prop_assert_eq!(tree.len(), distinct.len());
        prop_assert!(tree.height() <= max_height_for(tree.len()));
        prop_assert!(tree.inorder().windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn second_remove_is_noop(keys in proptest::collection::btree_set(0u16..1000, 1..100), pick in any::<prop::sample::Index>()) {
        let keys: Vec<u16> = keys.into_iter().collect();
        let victim = keys[pick.index(keys.len())];
        let mut tree: AvlTree<u16> = keys.iter().copied().collect();

        prop_assert!(tree.remove(&victim));
        let after_first = tree.inorder();
        prop_assert!(!tree.remove(&victim));
        prop_assert_eq!(tree.inorder(), after_first);
        prop_assert!(!tree.contains(&victim));
    }

    #[test]
    fn drain_by_pop_is_sorted(keys in proptest::collection::vec(-1000i32..1000, 0..150)) {
        let mut tree: AvlTree<i32, ReverseOrder> = keys.iter().copied().collect();
        let mut drained = Vec::new();
        while let Ok(key) = tree.pop_min() {
            drained.push(key);
            assert_balanced(&tree);
        }

        let mut expected: Vec<i32> = keys.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
        expected.reverse();
        prop_assert_eq!(drained, expected);
        prop_assert!(tree.is_empty());
    }
}
