use bstree::Tree;

use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`. The set is the
/// model: after any smattering of inserts and deletes, in either flavor, the
/// tree must hold exactly the model's keys.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                assert_eq!(tree.insert(k), set.insert(k));
            }
            Op::InsertRecursive(k) => {
                assert_eq!(tree.insert_recursive(k), set.insert(k));
            }
            Op::Delete(k) => {
                assert_eq!(tree.delete(&k), set.remove(&k));
            }
            Op::DeleteRecursive(k) => {
                assert_eq!(tree.delete_recursive(&k), set.remove(&k));
            }
        }
    }
}

fn keys_in_order(tree: &Tree<i8>) -> Vec<i8> {
    let mut keys = Vec::new();
    tree.in_order(|node| keys.push(*node.key()));
    keys
}

#[quickcheck]
fn fuzz_tree_matches_set_model(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut set);

    let model: Vec<i8> = set.iter().copied().collect();
    keys_in_order(&tree) == model && set.iter().all(|k| tree.find(k).is_some())
}

#[quickcheck]
fn fuzz_in_order_is_strictly_ascending(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut set);

    keys_in_order(&tree).windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn insert_flavors_build_identical_shapes(keys: Vec<i8>) -> bool {
    let mut iterative = Tree::new();
    let mut recursive = Tree::new();
    for k in &keys {
        iterative.insert(*k);
        recursive.insert_recursive(*k);
    }

    // A pre-order walk pins down the shape, not just the key set.
    let mut lhs = Vec::new();
    iterative.pre_order(|node| lhs.push(*node.key()));
    let mut rhs = Vec::new();
    recursive.pre_order(|node| rhs.push(*node.key()));

    lhs == rhs
}

#[quickcheck]
fn delete_flavors_agree_on_key_set(keys: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut iterative = Tree::new();
    let mut recursive = Tree::new();
    for k in &keys {
        iterative.insert(*k);
        recursive.insert(*k);
    }
    for k in &deletes {
        assert_eq!(iterative.delete(k), recursive.delete_recursive(k));
    }

    keys_in_order(&iterative) == keys_in_order(&recursive)
}

#[quickcheck]
fn delete_then_find_is_none(ops: Vec<Op<i8>>, key: i8) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut set);

    let mut before = keys_in_order(&tree);
    tree.delete(&key);
    before.retain(|k| *k != key);

    tree.find(&key).is_none() && keys_in_order(&tree) == before
}

#[quickcheck]
fn find_flavors_agree(keys: Vec<i8>, probes: Vec<i8>) -> bool {
    let tree: Tree<i8> = keys.into_iter().collect();

    probes.iter().all(|k| {
        let lhs = tree.find(k).map(|node| *node.key());
        let rhs = tree.find_recursive(k).map(|node| *node.key());
        lhs == rhs && lhs.map_or(true, |found| found == *k)
    })
}

#[quickcheck]
fn from_collection_is_balanced_and_height_minimal(keys: Vec<i8>) -> bool {
    let distinct = keys.iter().collect::<BTreeSet<_>>().len();
    let tree = Tree::from_collection(keys);

    let expected_height = if distinct == 0 {
        -1
    } else {
        distinct.ilog2() as isize
    };

    tree.is_balanced() && tree.height() == expected_height
}

#[quickcheck]
fn rebalance_preserves_the_key_set(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut set);

    let before = keys_in_order(&tree);
    tree.rebalance();

    tree.is_balanced() && keys_in_order(&tree) == before
}

#[quickcheck]
fn depth_is_consistent_with_height(keys: Vec<i8>) -> bool {
    let tree = Tree::from_collection(keys);
    let height = tree.height();

    let mut ok = true;
    tree.in_order(|node| {
        let depth = tree.depth(node);
        ok &= depth >= 0 && depth <= height;
    });
    ok
}
