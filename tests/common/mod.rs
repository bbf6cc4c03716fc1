#![allow(dead_code)]

use std::sync::Once;

use avl_core::{AvlTree, Comparator, Node};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a `RUST_LOG`-driven subscriber once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Every node's balance factor, in pre-order.
pub fn balance_factors<K>(node: Option<&Node<K>>) -> Vec<isize> {
    let mut out = Vec::new();
    let mut stack: Vec<&Node<K>> = node.into_iter().collect();
    while let Some(node) = stack.pop() {
        out.push(node.balance_factor());
        stack.extend(node.right());
        stack.extend(node.left());
    }
    out
}

/// Panic with context unless the tree passes every structural check.
pub fn assert_balanced<K, C: Comparator<K>>(tree: &AvlTree<K, C>) {
    if let Err(err) = tree.validate() {
        panic!("tree failed validation: {}", err);
    }
    let factors = balance_factors(tree.root());
    assert!(
        factors.iter().all(|bf| (-1..=1).contains(bf)),
        "balance factors out of range: {:?}",
        factors
    );
}

/// Keys of `node`'s two children, if present.
pub fn child_keys<K: Copy>(node: &Node<K>) -> (Option<K>, Option<K>) {
    (
        node.left().map(|child| *child.key()),
        node.right().map(|child| *child.key()),
    )
}

/// Tree built from `keys` in order.
pub fn build(keys: &[i32]) -> AvlTree<i32> {
    init_tracing();
    let mut tree = AvlTree::new();
    for &key in keys {
        tree.insert(key);
    }
    tree
}
