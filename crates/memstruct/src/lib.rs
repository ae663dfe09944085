//! # memstruct
//!
//! In-memory building blocks shared by the cache crate.
//!
//! ## Structures
//! - **LinkedList**: doubly linked list over a slot arena, addressed by
//!   generation-checked [`NodeHandle`]s (O(1) head/tail insert, tail removal,
//!   move-to-front)
//! - **BinarySearchTree**: ordered multiset with insert, contains, max lookup
//!   and a root-right-left visit
//!
//! Nothing here is synchronized. Share an instance across threads only behind
//! a lock covering the whole structure.

#![warn(missing_docs)]

pub mod bst;
mod error;
pub mod list;

pub use bst::BinarySearchTree;
pub use error::{Error, Result};
pub use list::{LinkedList, NodeHandle};
