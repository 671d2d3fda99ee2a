//! This crate sorts values by building a Binary Search Tree (BST) out of
//! them and walking it in order.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores values in `Node`s. Each `Node` holds one
//! value and has up to two child `Node`s. The invariants kept here are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    strictly less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than or equal to its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Visiting the left subtree, then the subtree root, then the right subtree
//! (an "in-order" walk) yields every value in ascending order. Building a
//! tree and walking it is therefore a sort: see [`tree_sort`].
//!
//! The tree here is deliberately not self-balancing. Feeding it sorted input
//! gives a tree whose height equals its length (a "degenerate" tree), so
//! inserting takes `O(N)` per value in the worst case.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod sort;
pub mod tree;


pub use sort::{tree_sort, tree_sort_owned};
pub use tree::Tree;
