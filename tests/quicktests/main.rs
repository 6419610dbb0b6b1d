//! Property tests run against the public API of both trees.

use balanced_bst::Node;
use quickcheck::{Arbitrary, Gen};

mod avl;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Remove one occurrence of the value from the data structure
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) || bool::arbitrary(g) {
            Op::Insert(T::arbitrary(g))
        } else {
            Op::Remove(T::arbitrary(g))
        }
    }
}

/// Recomputes the height of the subtree under `node` from scratch, -1 for no subtree.
pub fn height<T>(node: Option<&Node<T>>) -> isize {
    node.map_or(-1, |n| 1 + height(n.left()).max(height(n.right())))
}

/// Whether every stored height under `node` matches a recount.
pub fn heights_are_accurate<T>(node: Option<&Node<T>>) -> bool {
    match node {
        None => true,
        Some(n) => {
            n.height() == height(Some(n))
                && heights_are_accurate(n.left())
                && heights_are_accurate(n.right())
        }
    }
}

/// Whether every node under `node` has subtrees whose heights differ by at most one.
pub fn is_balanced<T>(node: Option<&Node<T>>) -> bool {
    match node {
        None => true,
        Some(n) => {
            (height(n.left()) - height(n.right())).abs() <= 1
                && is_balanced(n.left())
                && is_balanced(n.right())
        }
    }
}

/// Whether the values yielded are in non-decreasing order.
pub fn is_sorted<'a, T: Ord + 'a>(values: impl IntoIterator<Item = &'a T>) -> bool {
    let mut values = values.into_iter();
    let Some(mut prev) = values.next() else {
        return true;
    };
    for value in values {
        if value < prev {
            return false;
        }
        prev = value;
    }
    true
}
