//! The tree type shared by [`unbalanced::Tree`][crate::unbalanced::Tree] and
//! [`avl::Tree`][crate::avl::Tree]. They only differ in what happens to each node on the way
//! back up from an insertion or removal, which is picked by the [`Balance`] parameter.

use std::fmt;
use std::marker::PhantomData;

use crate::error::TreeError;
use crate::node::{Link, Node};
use crate::traverse::{DepthFirst, LevelOrder, Order};

/// How a [`SearchTree`] repairs itself after a structural change. Implemented by
/// [`Unbalanced`][crate::unbalanced::Unbalanced] and [`Avl`][crate::avl::Avl] only.
pub trait Balance: sealed::Sealed {}

pub(crate) mod sealed {
    use crate::node::Link;

    pub trait Sealed {
        /// Whether every node must stay within one level of balance.
        const BALANCED: bool;

        /// Run on every ancestor of a structural change, deepest first.
        fn fix<T>(link: &mut Link<T>);
    }
}

/// A Binary Search Tree holding directly comparable values. Equal values are allowed and each
/// gets its own node.
///
/// Use it through the [`unbalanced::Tree`][crate::unbalanced::Tree] and
/// [`avl::Tree`][crate::avl::Tree] aliases.
pub struct SearchTree<T, B> {
    root: Link<T>,
    len: usize,
    balance: PhantomData<B>,
}

impl<T, B> Default for SearchTree<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B> Clone for SearchTree<T, B>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
            balance: PhantomData,
        }
    }
}

impl<T, B> fmt::Debug for SearchTree<T, B>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<T, B> SearchTree<T, B> {
    /// Generates a new, empty tree.
    pub fn new() -> Self {
        Self {
            root: Link::default(),
            len: 0,
            balance: PhantomData,
        }
    }

    /// The number of values in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The height of the tree: -1 when empty, 0 for a single node.
    pub fn height(&self) -> isize {
        self.root.height()
    }

    /// The root node, for inspecting the shape of the tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.node()
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.root = Link::default();
        self.len = 0;
    }

    /// Values in ascending order.
    pub fn inorder(&self) -> DepthFirst<'_, T> {
        DepthFirst::new(self.root(), self.len, Order::In)
    }

    /// Each node's value before its left subtree, then its right subtree.
    pub fn preorder(&self) -> DepthFirst<'_, T> {
        DepthFirst::new(self.root(), self.len, Order::Pre)
    }

    /// Each node's left subtree, then its right subtree, then its value.
    pub fn postorder(&self) -> DepthFirst<'_, T> {
        DepthFirst::new(self.root(), self.len, Order::Post)
    }

    /// Values level by level from the root, left to right within a level.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root(), self.len)
    }
}

impl<T, B> SearchTree<T, B>
where
    T: Ord,
    B: Balance,
{
    /// Inserts `value` as a new leaf, placed left of any node it compares equal to, then
    /// repairs the path back up to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(30);
    /// tree.insert(20);
    /// tree.insert(10);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.value(), &20);
    /// assert_eq!(root.left().map(|n| *n.value()), Some(10));
    /// assert_eq!(root.right().map(|n| *n.value()), Some(30));
    /// ```
    pub fn insert(&mut self, value: T) {
        self.root.insert(value, B::fix);
        self.len += 1;

        #[cfg(any(test, feature = "consistency_check"))]
        self.check_consistency();
    }

    /// Removes one occurrence of `value` and returns it. If the tree doesn't contain `value`,
    /// nothing happens and `None` is returned.
    ///
    /// A node with two children is not unlinked itself. Its in-order successor is unlinked
    /// instead and the successor's value is moved into the node. So node identity is not
    /// preserved across a removal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::avl::Tree;
    ///
    /// let mut tree: Tree<_> = [20, 10, 30, 40].into_iter().collect();
    ///
    /// // 20 is now right-heavy so it rotates left under 30.
    /// assert_eq!(tree.remove(&10), Some(10));
    /// assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), [30, 20, 40]);
    ///
    /// assert_eq!(tree.remove(&10), None);
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let removed = self.root.remove(value, B::fix);
        match removed {
            Some(_) => self.len -= 1,
            None => log::debug!("remove: value not present, tree unchanged"),
        }

        #[cfg(any(test, feature = "consistency_check"))]
        self.check_consistency();

        removed
    }

    /// Whether some node holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.root().and_then(|n| n.find(value)).is_some()
    }

    /// The smallest value.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyCollection`] if the tree is empty.
    pub fn min(&self) -> Result<&T, TreeError> {
        self.root()
            .map(|n| n.leftmost().value())
            .ok_or(TreeError::EmptyCollection)
    }

    /// The largest value.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyCollection`] if the tree is empty.
    pub fn max(&self) -> Result<&T, TreeError> {
        self.root()
            .map(|n| n.rightmost().value())
            .ok_or(TreeError::EmptyCollection)
    }

    /// Panics unless the in-order values are sorted, every stored height is correct, every node
    /// is balanced (for balanced trees) and `len` matches the number of nodes.
    #[cfg(any(test, feature = "consistency_check"))]
    pub(crate) fn check_consistency(&self) {
        let mut values = self.inorder();
        if let Some(mut prev) = values.next() {
            for value in values {
                assert!(prev <= value, "in-order traversal is not sorted");
                prev = value;
            }
        }
        assert_eq!(self.root.check_consistency(B::BALANCED), self.len);
    }
}

impl<T, B> FromIterator<T> for SearchTree<T, B>
where
    T: Ord,
    B: Balance,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, B> Extend<T> for SearchTree<T, B>
where
    T: Ord,
    B: Balance,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, B> IntoIterator for &'a SearchTree<T, B> {
    type Item = &'a T;
    type IntoIter = DepthFirst<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}
