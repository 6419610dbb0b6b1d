//! The building blocks shared by every tree in this crate: a [`Node`] and the owning `Link` to
//! it.
//!
//! Structural algorithms here (placing a new leaf, unlinking a node) are written once and take a
//! `fix` hook. On the way back up from the change each ancestor is handed to `fix`: the
//! unbalanced tree only refreshes heights, the AVL tree also rotates.

use std::cmp::Ordering;
use std::fmt;

/// A hook run on every link along the path of a structural change, deepest first.
pub(crate) type Fix<T> = fn(&mut Link<T>);

/// A `Node` holds one value and owns its (possibly empty) left and right subtrees. There is no
/// parent pointer: whoever owns the `Link` to a node is responsible for re-linking it.
#[derive(Clone)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// The longest path (in edges) from this node down to a leaf. A node with no children has a
    /// height of 0.
    pub(crate) height: isize,
}

/// Shows the node and the values of its direct children, not whole subtrees.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("height", &self.height)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

impl<T> Node<T> {
    /// Construct a new childless `Node` holding `value`.
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: Link::default(),
            right: Link::default(),
            height: 0,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of this node's left subtree, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.node()
    }

    /// The root of this node's right subtree, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.node()
    }

    /// The number of edges on the longest path from this node to a leaf. Leaves have height 0.
    pub fn height(&self) -> isize {
        self.height
    }

    /// `height(left) - height(right)` where a missing subtree has height -1.
    pub fn balance_factor(&self) -> isize {
        self.left.height() - self.right.height()
    }

    /// Recomputes the stored height from the children's stored heights.
    pub(crate) fn fix_height(&mut self) {
        self.height = 1 + self.left.height().max(self.right.height());
    }

    fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub(crate) fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = Some(self);
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    pub(crate) fn leftmost(&self) -> &Node<T> {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    pub(crate) fn rightmost(&self) -> &Node<T> {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }
}

#[derive(Clone, Copy, Debug)]
enum Side {
    Left,
    Right,
}

/// Nodes detached on the way down a tree, each paired with the side its child was taken from.
/// Walking down this way needs no recursion, so a degenerate unbalanced tree (as deep as it is
/// long) can't overflow the call stack.
type Path<T> = Vec<(Box<Node<T>>, Side)>;

/// An owning pointer to an optional subtree.
pub struct Link<T>(pub(crate) Option<Box<Node<T>>>);

impl<T> Default for Link<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> Drop for Link<T> {
    /// Tears the subtree down with an explicit stack rather than recursively.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.0.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.0.take());
            stack.extend(node.right.0.take());
        }
    }
}

impl<T> Clone for Link<T>
where
    T: Clone,
{
    /// Copies the subtree top-down with an explicit stack, for the same reason `drop` does.
    fn clone(&self) -> Self {
        let mut copy = Link::default();
        let mut work: Vec<(&Node<T>, &mut Link<T>)> =
            self.node().map(|n| (n, &mut copy)).into_iter().collect();

        while let Some((source, slot)) = work.pop() {
            let node = slot.0.insert(Box::new(Node {
                value: source.value.clone(),
                left: Link::default(),
                right: Link::default(),
                height: source.height,
            }));
            let Node { left, right, .. } = &mut **node;
            work.extend(source.left().map(|n| (n, left)));
            work.extend(source.right().map(|n| (n, right)));
        }
        copy
    }
}

impl<T> Link<T> {
    pub(crate) fn node(&self) -> Option<&Node<T>> {
        self.0.as_deref()
    }

    pub(crate) fn take(&mut self) -> Self {
        Link(self.0.take())
    }

    /// The height of the subtree behind this link, -1 if it is empty.
    pub(crate) fn height(&self) -> isize {
        self.node().map_or(-1, Node::height)
    }

    /// A [`Fix`] that only refreshes the stored height.
    pub(crate) fn fix_height(&mut self) {
        if let Some(node) = self.0.as_mut() {
            node.fix_height();
        }
    }

    /// Re-attaches `link` under the detached nodes in `path`, deepest first, handing each
    /// re-attached node to `fix` if there is one. Returns the rebuilt subtree.
    fn zip(path: Path<T>, mut link: Link<T>, fix: Option<Fix<T>>) -> Link<T> {
        for (mut node, side) in path.into_iter().rev() {
            *node.child_mut(side) = link;
            link = Link(Some(node));
            if let Some(fix) = fix {
                fix(&mut link);
            }
        }
        link
    }

    /// Places `value` in a new leaf at the first empty slot found by descending left when
    /// `value <= node.value` and right otherwise, then runs `fix` on every ancestor.
    pub(crate) fn insert(&mut self, value: T, fix: Fix<T>)
    where
        T: Ord,
    {
        let mut path = Path::new();
        let mut link = self.take();
        while let Some(mut node) = link.0.take() {
            let side = if value <= node.value {
                Side::Left
            } else {
                Side::Right
            };
            link = node.child_mut(side).take();
            path.push((node, side));
        }

        link.0 = Some(Node::new_boxed(value));
        *self = Self::zip(path, link, Some(fix));
    }

    /// Removes one node holding `value` and returns the value, or `None` (changing nothing) if
    /// no such node exists. Every ancestor of the structural change is handed to `fix`.
    pub(crate) fn remove(&mut self, value: &T, fix: Fix<T>) -> Option<T>
    where
        T: Ord,
    {
        let mut path = Path::new();
        let mut link = self.take();
        let removed = loop {
            let Some(mut node) = link.0.take() else {
                break None;
            };
            let side = match value.cmp(&node.value) {
                Ordering::Equal => {
                    link.0 = Some(node);
                    break link.unlink(fix);
                }
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            link = node.child_mut(side).take();
            path.push((node, side));
        };

        // Nothing moved if nothing was removed, so there is nothing to fix.
        let fix = removed.is_some().then_some(fix);
        *self = Self::zip(path, link, fix);
        removed
    }

    /// Unlinks the node behind this link and returns its value.
    ///
    /// With zero or one child the child simply takes the node's place. With two children the
    /// node stays where it is: its in-order successor (the leftmost node of the right subtree)
    /// is unlinked instead and the successor's value is moved into this node.
    fn unlink(&mut self, fix: Fix<T>) -> Option<T> {
        let node = self.0.as_mut()?;
        if node.left.0.is_some() && node.right.0.is_some() {
            let successor = node.right.remove_min(fix)?;
            let removed = std::mem::replace(&mut node.value, successor);
            fix(self);
            return Some(removed);
        }

        let mut node = self.0.take()?;
        *self = if node.left.0.is_some() {
            node.left.take()
        } else {
            node.right.take()
        };
        let node = *node;
        Some(node.value)
    }

    /// Unlinks the leftmost node of this subtree, which has no left child, and returns its value.
    fn remove_min(&mut self, fix: Fix<T>) -> Option<T> {
        let mut path = Path::new();
        let mut node = self.0.take()?;
        while let Some(left) = node.left.0.take() {
            path.push((node, Side::Left));
            node = left;
        }

        let Node { value, right, .. } = *node;
        *self = Self::zip(path, right, Some(fix));
        Some(value)
    }
}

#[cfg(any(test, feature = "consistency_check"))]
impl<T> Link<T> {
    /// Asserts every stored height is correct (and, when `balanced`, that every balance factor
    /// is in `-1..=1`). Returns the number of nodes in the subtree.
    pub(crate) fn check_consistency(&self, balanced: bool) -> usize {
        let mut count = 0;
        let mut work: Vec<&Node<T>> = self.node().into_iter().collect();
        while let Some(node) = work.pop() {
            assert_eq!(
                node.height,
                1 + node.left.height().max(node.right.height()),
                "stale height"
            );
            if balanced {
                assert!(node.balance_factor().abs() <= 1, "AVL balance violated");
            }
            work.extend(node.left());
            work.extend(node.right());
            count += 1;
        }
        count
    }
}
