//! A self-balancing BST (specifically, an AVL tree).
//!
//! Insertion and removal place and unlink nodes exactly like the [unbalanced
//! tree][crate::unbalanced::Tree]. On the way back up from the change every ancestor refreshes
//! its height and, if one of its subtrees has become two levels taller than the other, rotates
//! to even them out again. That keeps the height of the tree within roughly `1.44 * lg(N)`.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Ascending input would make a plain BST a linked list.
//! for x in 1..=7 {
//!     tree.insert(x);
//! }
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.root().map(|n| *n.value()), Some(4));
//!
//! assert_eq!(tree.remove(&4), Some(4));
//! assert!(!tree.contains(&4));
//! assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), [5, 2, 6, 1, 3, 7]);
//! ```

use crate::node::{Link, Node};
use crate::search_tree::{sealed::Sealed, Balance, SearchTree};

/// An AVL tree holding directly comparable values. For every node the heights of its two
/// subtrees differ by at most one.
///
/// Equal values are allowed. They are inserted to the left of the node they compare equal to,
/// but a later rotation may carry an equal value up over its twin so that it ends up on the
/// right. In-order traversal is always sorted either way.
pub type Tree<T> = SearchTree<T, Avl>;

/// The [`Balance`] of an AVL tree: every ancestor of a change refreshes its height and rotates
/// if it has become unbalanced.
///
/// A single insertion grows one subtree by at most one level so at most one (single or double)
/// rotation fires, at the lowest unbalanced ancestor. The ancestors above it are still visited
/// but find themselves balanced. Removal, on the other hand, may need a rotation at every level
/// on the way back up to the root, and every one of them is performed.
#[derive(Debug)]
pub enum Avl {}

impl Sealed for Avl {
    const BALANCED: bool = true;

    fn fix<T>(link: &mut Link<T>) {
        link.rebalance();
    }
}

impl Balance for Avl {}

impl<T> Link<T> {
    /// Refreshes the height of the node behind this link and, if its balance factor has left
    /// `-1..=1`, rotates it back into balance.
    ///
    /// See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.
    pub(crate) fn rebalance(&mut self) {
        let Some(node) = self.0.as_mut() else {
            return;
        };
        node.fix_height();

        match node.balance_factor() {
            bf if bf > 1 => {
                if node.left.node().map_or(0, Node::balance_factor) < 0 {
                    log::trace!("rebalance: left-right case");
                    node.left.rotate_left();
                } else {
                    log::trace!("rebalance: left-left case");
                }
                self.rotate_right();
            }
            bf if bf < -1 => {
                if node.right.node().map_or(0, Node::balance_factor) > 0 {
                    log::trace!("rebalance: right-left case");
                    node.right.rotate_right();
                } else {
                    log::trace!("rebalance: right-right case");
                }
                self.rotate_left();
            }
            _ => {}
        }

        debug_assert!(self.node().map_or(true, |n| n.balance_factor().abs() <= 1));
    }

    /// Rotate self to the right. This moves the left child up and self down. Used to rebalance
    /// the tree when the left child is too tall. Without a left child this does nothing.
    ///
    /// # Diagram
    ///
    /// ```text
    ///        old_root               new_root
    ///        /     \                /     \
    ///   new_root    z   rotate ->  x    old_root
    ///    /   \                           /   \
    ///   x     y                         y     z
    /// ```
    ///
    /// Only three links change (`new_root.right`, `old_root.left` and `self`) and only the two
    /// nodes whose children changed get new heights, the demoted one first.
    fn rotate_right(&mut self) {
        let Some(mut old_root) = self.0.take() else {
            return;
        };
        let Some(mut new_root) = old_root.left.0.take() else {
            self.0 = Some(old_root);
            return;
        };

        old_root.left = new_root.right.take();
        old_root.fix_height();

        new_root.right = Link(Some(old_root));
        new_root.fix_height();
        self.0 = Some(new_root);
    }

    /// Rotate self to the left. The mirror image of [`Link::rotate_right`].
    ///
    /// ```text
    ///    old_root                     new_root
    ///    /     \                      /     \
    ///   x    new_root  rotate ->  old_root   z
    ///         /   \                /   \
    ///        y     z              x     y
    /// ```
    fn rotate_left(&mut self) {
        let Some(mut old_root) = self.0.take() else {
            return;
        };
        let Some(mut new_root) = old_root.right.0.take() else {
            self.0 = Some(old_root);
            return;
        };

        old_root.right = new_root.left.take();
        old_root.fix_height();

        new_root.left = Link(Some(old_root));
        new_root.fix_height();
        self.0 = Some(new_root);
    }
}
