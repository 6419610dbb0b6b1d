use balanced_bst::avl::Tree;
use rand::{rngs::StdRng, Rng, SeedableRng};

use std::collections::HashSet;

use crate::{heights_are_accurate, is_balanced, is_sorted, Op};

/// Whether the tree is a valid AVL tree holding exactly `len` values.
fn valid<T: Ord>(tree: &Tree<T>, len: usize) -> bool {
    is_sorted(tree.inorder())
        && is_balanced(tree.root())
        && heights_are_accurate(tree.root())
        && tree.len() == len
        && tree.inorder().count() == len
}

/// Applies a set of operations to a tree and a sorted vec, checking the
/// tree is still a valid AVL tree after every single one.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, model: &mut Vec<i8>) -> bool {
    for op in ops {
        match *op {
            Op::Insert(x) => {
                tree.insert(x);
                let pos = model.partition_point(|y| *y <= x);
                model.insert(pos, x);
            }
            Op::Remove(x) => {
                let expected = model.iter().position(|y| *y == x).map(|pos| model.remove(pos));
                if tree.remove(&x) != expected {
                    return false;
                }
            }
        }
        if !valid(tree, model.len()) {
            return false;
        }
    }
    true
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut model = Vec::new();

        do_ops(&ops, &mut tree, &mut model) && tree.inorder().copied().eq(model)
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while tree.remove(delete).is_some() {}
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
            && valid(&tree, still_present.len())
    }
}

quickcheck::quickcheck! {
    fn traversals_visit_every_value(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut sorted = xs;
        sorted.sort();

        let mut pre: Vec<_> = tree.preorder().copied().collect();
        let mut post: Vec<_> = tree.postorder().copied().collect();
        let mut level: Vec<_> = tree.level_order().copied().collect();
        pre.sort();
        post.sort();
        level.sort();

        tree.inorder().copied().eq(sorted.iter().copied())
            && pre == sorted
            && post == sorted
            && level == sorted
    }
}

#[test]
fn random_inserts_and_removes_with_fixed_seed() {
    let mut rng = StdRng::seed_from_u64(42);

    for round in 0..20 {
        let mut tree = Tree::new();
        let mut model: Vec<u8> = Vec::new();
        let ops = rng.gen_range(0..=200);

        for _ in 0..ops {
            let x: u8 = rng.gen_range(0..64);
            if rng.gen_bool(0.6) {
                tree.insert(x);
                let pos = model.partition_point(|y| *y <= x);
                model.insert(pos, x);
            } else {
                let before = tree.len();
                let removed = tree.remove(&x);
                match model.iter().position(|y| *y == x) {
                    Some(pos) => {
                        model.remove(pos);
                        assert_eq!(removed, Some(x), "round {round}");
                    }
                    None => {
                        assert_eq!(removed, None, "round {round}");
                        assert_eq!(tree.len(), before, "round {round}");
                    }
                }
            }
            assert!(valid(&tree, model.len()), "round {round}");
        }
        assert!(tree.inorder().eq(model.iter()), "round {round}");
    }
}

#[test]
fn restartable_traversals() {
    let mut tree: Tree<_> = (1..=3).collect();
    let first: Vec<_> = tree.level_order().copied().collect();
    assert_eq!(first, tree.level_order().copied().collect::<Vec<_>>());

    tree.insert(4);
    assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), [2, 1, 3, 4]);
}
