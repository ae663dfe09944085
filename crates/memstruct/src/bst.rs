//! Binary search tree
//!
//! Values smaller than a node go left, values greater than or equal go right,
//! so duplicates collect in right subtrees. All walks use loops or an explicit
//! stack, which keeps degenerate (list-shaped) trees off the call stack.

use crate::error::{Error, Result};

#[derive(Debug)]
struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

/// Ordered binary tree allowing duplicate values
#[derive(Debug)]
pub struct BinarySearchTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Create a tree holding a single value
    pub fn with_root(value: T) -> Self {
        Self {
            root: Some(Node::leaf(value)),
            len: 1,
        }
    }

    /// Number of stored values, duplicates included
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the tree is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a value
    pub fn insert(&mut self, value: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::leaf(value));
        self.len += 1;
    }

    /// Check whether a value equal to `target` is stored
    pub fn contains(&self, target: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if *target == node.value {
                return true;
            }
            current = if *target < node.value {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }

    /// Largest stored value
    ///
    /// # Errors
    /// * `Error::EmptyTree` - nothing has been inserted
    pub fn get_max(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyTree)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    /// Call `f` on every value.
    ///
    /// Order is node, then its right subtree, then its left subtree. This is
    /// neither pre-, in- nor post-order; callers relying on sorted output
    /// should collect and sort.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            f(&node.value);
            // Pushed left first so the whole right subtree is drained before it
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
        }
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        // Unwind iteratively; the default recursive drop can overflow on deep trees
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
