//! Tree sort: insert every value into a [`Tree`] and read them back with an
//! in-order walk.
//!
//! The sort is stable. Equal values are sent to the right of the ones
//! already stored, so they come back in the order they arrived.
//!
//! Because the tree is never rebalanced, input that's already sorted (or
//! reverse sorted) takes quadratic time to build.
//!
//! # Examples
//!
//! ```
//! use treesort::tree_sort;
//!
//! let values = [2, 4, 3, 1, 9, 7, 8];
//! assert_eq!(tree_sort(&values), vec![1, 2, 3, 4, 7, 8, 9]);
//!
//! // The input isn't touched.
//! assert_eq!(values, [2, 4, 3, 1, 9, 7, 8]);
//! ```

use crate::tree::Tree;

/// Returns a new `Vec` with the values of `values` in non-decreasing order.
/// Every value is cloned once.
pub fn tree_sort<T>(values: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    tree_sort_owned(values.iter().cloned())
}

/// Like [`tree_sort`] but takes ownership of the values instead of cloning
/// them.
///
/// # Examples
///
/// ```
/// use treesort::tree_sort_owned;
///
/// let words = vec!["pear".to_string(), "apple".to_string(), "fig".to_string()];
/// assert_eq!(tree_sort_owned(words), vec!["apple", "fig", "pear"]);
/// ```
pub fn tree_sort_owned<T, I>(values: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let tree: Tree<T> = values.into_iter().collect();
    tracing::trace!(len = tree.len(), height = tree.height(), "built tree");
    tree.into_sorted_vec()
}
