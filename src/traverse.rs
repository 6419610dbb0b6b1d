//! Lazy traversals over a tree's values.
//!
//! Each traversal borrows the tree, so the tree can't be restructured while one is in progress.
//! Asking the tree for a traversal again starts a fresh one over its current shape.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;

#[derive(Clone, Copy, Debug)]
pub(crate) enum Order {
    /// Left subtree, node, right subtree. Yields values in ascending order.
    In,
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, right subtree, node.
    Post,
}

/// Work remaining in a depth-first traversal.
#[derive(Debug)]
enum Step<'a, T> {
    /// Visit this whole subtree.
    Descend(&'a Node<T>),
    /// Hand out this value.
    Yield(&'a T),
}

/// A depth-first traversal (in-, pre- or post-order) of a tree's values.
///
/// Created by the `inorder`, `preorder` and `postorder` methods on the trees in this crate.
#[derive(Debug)]
pub struct DepthFirst<'a, T> {
    order: Order,
    work: Vec<Step<'a, T>>,
    remaining: usize,
}

impl<'a, T> DepthFirst<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize, order: Order) -> Self {
        Self {
            order,
            work: root.map(Step::Descend).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for DepthFirst<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.work.pop() {
            let node = match step {
                Step::Yield(value) => {
                    self.remaining -= 1;
                    return Some(value);
                }
                Step::Descend(node) => node,
            };

            let left = node.left().map(Step::Descend);
            let right = node.right().map(Step::Descend);
            let value = Some(Step::Yield(&node.value));

            // The stack pops last-in first, so push in reverse visiting order.
            let steps = match self.order {
                Order::In => [right, value, left],
                Order::Pre => [right, left, value],
                Order::Post => [value, right, left],
            };
            self.work.extend(steps.into_iter().flatten());
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for DepthFirst<'_, T> {}

impl<T> FusedIterator for DepthFirst<'_, T> {}

/// A breadth-first traversal of a tree's values, top level first and left to right within a
/// level.
///
/// Created by the `level_order` method on the trees in this crate.
#[derive(Debug)]
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            queue: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LevelOrder<'_, T> {}

impl<T> FusedIterator for LevelOrder<'_, T> {}
