//! An interactive shell around a single in-memory Binary Search Tree (BST)
//! of unique, nonzero integers.
//!
//! ## Binary Search Tree
//!
//! A BST stores its values in `Node`s, each of which may have a left and a
//! right child `Node`. The invariants that make the structure searchable
//! are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than its own value.
//!
//! Searching therefore takes `O(height)` steps, and visiting the left
//! subtree, then a node, then its right subtree yields every value in
//! ascending order. That in-order walk also gives each value a well-defined
//! neighbor on either side, which is what the predecessor and successor
//! lookups report.
//!
//! The [`tree`] module implements the tree itself; the [`repl`] module is
//! the line-based command loop around it, and the `bstree` binary wires
//! that loop to stdin and stdout.

#![deny(missing_docs)]

pub mod repl;
pub mod tree;

#[cfg(test)]
mod test;
