//! This crate exposes two Binary Search Trees (BSTs), a plain one and a
//! self-balancing AVL tree, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a [`Node`]. A `Node` stores a value
//! and will sometimes have child `Node`s. The most important invariants of
//! a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than or equal to its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the number
//! of edges on the longest path from the root `Node` to a leaf `Node`). BSTs also
//! naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree.
//!
//! ## AVL Tree
//!
//! Left to itself a BST's shape depends on the order values arrive in: sorted
//! input makes a tree that is just a linked list. An AVL tree additionally keeps,
//! for every `Node`, the heights of its two subtrees within one of each other
//! (their difference is the node's "balance factor"). Whenever an insert or
//! delete breaks that, a few nodes are "rotated" around to restore it. This limits
//! the height to `O(lg N)` where `N` is the number of nodes in the tree.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::{avl, unbalanced, TreeError};
//!
//! let plain: unbalanced::Tree<_> = (0..7).collect();
//! let balanced: avl::Tree<_> = (0..7).collect();
//!
//! assert_eq!(plain.height(), 6);
//! assert_eq!(balanced.height(), 2);
//! assert!(plain.inorder().eq(balanced.inorder()));
//!
//! assert_eq!(avl::Tree::<i32>::new().min(), Err(TreeError::EmptyCollection));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
mod error;
mod node;
mod search_tree;
mod traverse;
pub mod unbalanced;


pub use error::TreeError;
pub use node::Node;
pub use search_tree::{Balance, SearchTree};
pub use traverse::{DepthFirst, LevelOrder};
