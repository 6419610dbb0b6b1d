//! A plain, unbalanced BST. Nodes go wherever the insertion order sends them so sorted input
//! degrades the tree into a linked list of height `N - 1`.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::unbalanced::Tree;
//!
//! let mut tree: Tree<_> = [5, 3, 7].into_iter().collect();
//!
//! assert!(tree.contains(&3));
//! assert_eq!(tree.min(), Ok(&3));
//!
//! // Duplicates are kept, each in its own node.
//! tree.insert(3);
//! assert_eq!(tree.len(), 4);
//!
//! // Removing returns the value. Removing something absent does nothing.
//! assert_eq!(tree.remove(&3), Some(3));
//! assert_eq!(tree.remove(&42), None);
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [3, 5, 7]);
//! ```

use crate::node::Link;
use crate::search_tree::{sealed::Sealed, Balance, SearchTree};

/// An unbalanced Binary Search Tree holding directly comparable values. Equal values are
/// allowed and are placed in the left subtree of the node they compare equal to.
pub type Tree<T> = SearchTree<T, Unbalanced>;

/// The [`Balance`] of a plain BST: nodes only refresh their heights, nothing ever rotates.
#[derive(Debug)]
pub enum Unbalanced {}

impl Sealed for Unbalanced {
    const BALANCED: bool = false;

    fn fix<T>(link: &mut Link<T>) {
        link.fix_height();
    }
}

impl Balance for Unbalanced {}
