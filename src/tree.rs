//! An unbalanced Binary Search Tree that owns its values and hands them
//! back in ascending order. Every node is owned by its parent through a
//! `Box`, so there are no parent pointers, no sharing and no cycles.
//!
//! Equal values always descend to the right. In-order traversal therefore
//! yields duplicates in the order they were inserted.
//!
//! No balancing happens: inserting already sorted values produces a chain
//! whose height equals the number of values. Walking, dropping and
//! inserting all use loops or explicit stacks so such chains never recurse.
//!
//! # Examples
//!
//! ```
//! use treesort::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(2);
//!
//! // Values come back sorted, duplicates included.
//! assert_eq!(tree.to_sorted_vec(), vec![1, 2, 2]);
//! assert_eq!(tree.len(), 3);
//! ```

use std::fmt;
use std::iter::FusedIterator;

/// An owning link to a subtree. `None` marks the empty slot below a leaf.
type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree over a totally ordered `T`. Values are only ever
/// added, never removed, and read back through an in-order walk.
///
/// `T: Ord` is required by [`insert`][Tree::insert]. An `Ord` impl that is
/// not a total order (for example one wrapping a float NaN inconsistently)
/// doesn't cause memory unsafety but the resulting order is unspecified.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

/// One stored value. A node is created when its value is inserted and
/// afterwards only its child links change.
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        dismantle(self.root.take().into_iter().collect());
    }
}

/// Drops a forest of nodes without recursing into their children. The
/// derived drop of `Box<Node>` would recurse once per level and a
/// degenerate tree has as many levels as it has nodes.
fn dismantle<T>(mut stack: Vec<Box<Node<T>>>) {
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone + Ord,
{
    /// Replays the values in pre-order. Every node is inserted after its
    /// ancestors so the copy has exactly the same shape as `self`.
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            tree.insert(node.value.clone());
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        tree
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Adds `value` to the tree as a new leaf. Existing nodes are never
    /// moved.
    ///
    /// Starting at the root, the walk goes left when `value` is strictly
    /// smaller than the node's value and right otherwise, so a value equal
    /// to one already stored lands after it in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use treesort::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.to_sorted_vec(), vec![1, 3, 3]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::new_boxed(value));
        self.len += 1;
    }

    /// The number of values stored. Every duplicate counts.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An
    /// empty tree has a height of 0 and a single node a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use treesort::Tree;
    ///
    /// // Sorted input isn't rebalanced and leans all the way right.
    /// let tree: Tree<_> = (1..=5).collect();
    /// assert_eq!(tree.height(), 5);
    /// ```
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        tallest
    }

    /// Returns an iterator over the values in ascending order.
    ///
    /// The iterator borrows the tree, so the tree can't be modified until
    /// the walk is dropped. Each call starts a fresh walk from the smallest
    /// value.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Calls `visit` on every value in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use treesort::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 4, 3, 1].into_iter().collect();
    ///
    /// let mut seen = String::new();
    /// tree.inorder(|v| seen.push_str(&v.to_string()));
    /// assert_eq!(seen, "1234");
    /// ```
    pub fn inorder<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        for value in self.iter() {
            visit(value);
        }
    }

    /// Copies the values out in ascending order, leaving the tree as is.
    pub fn to_sorted_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes the tree and returns its values in ascending order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take(), self.len)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowing in-order walk over a [`Tree`]. Created by [`Tree::iter`].
///
/// The stack holds the nodes whose left subtree is being (or has been)
/// visited but whose own value hasn't been yielded yet.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// An owning in-order walk over a [`Tree`]. Created by
/// [`IntoIterator::into_iter`]. Nodes are freed as their values are
/// yielded.
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    /// Detaches the left children on the way down so a popped node only
    /// still owns its right subtree.
    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        dismantle(std::mem::take(&mut self.stack));
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
