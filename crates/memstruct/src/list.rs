//! Doubly linked list backed by a slot arena.
//!
//! Nodes live in a `Vec` of slots and link to each other by slot index, so the
//! list is the single owner of every node and `prev`/`next` are plain indices.
//! Callers hold [`NodeHandle`]s to reach a node in O(1) without owning it.
//!
//! ```text
//!   head ─► [3] ◄──► [0] ◄──► [2] ◄── tail
//!           MRU                LRU
//! ```
//!
//! A handle carries the id of the list that issued it and the generation of
//! its slot. Handles from another list, or for a node that has since been
//! removed, are rejected with [`Error::StaleHandle`] before anything is
//! touched.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Error, Result};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Non-owning reference to a node inside a [`LinkedList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    list: u64,
    index: usize,
    generation: u64,
}

impl NodeHandle {
    /// Slot index of the node inside its list's arena
    pub fn index(self) -> usize {
        self.index
    }
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug)]
struct Slot<T> {
    generation: u64,
    node: Option<Node<T>>,
}

/// Doubly linked list with O(1) head/tail insertion and removal and O(1)
/// reordering through handles
#[derive(Debug)]
pub struct LinkedList<T> {
    id: u64,
    slots: Vec<Slot<T>>,
    free_list: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty list with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of nodes in the list
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `value` as the new head and return its handle
    pub fn add_to_head(&mut self, value: T) -> NodeHandle {
        let idx = self.alloc_node(value);
        self.link_front(idx);
        self.len += 1;
        self.handle_at(idx)
    }

    /// Insert `value` as the new tail and return its handle
    pub fn add_to_tail(&mut self, value: T) -> NodeHandle {
        let idx = self.alloc_node(value);
        self.link_back(idx);
        self.len += 1;
        self.handle_at(idx)
    }

    /// Relink the node behind `handle` as the head
    ///
    /// # Errors
    /// * `Error::StaleHandle` - handle was not issued by this list or its node is gone
    pub fn move_to_front(&mut self, handle: NodeHandle) -> Result<()> {
        let idx = self.resolve(handle)?;
        if self.head == Some(idx) {
            return Ok(());
        }

        self.unlink(idx);
        self.link_front(idx);
        Ok(())
    }

    /// Relink the node behind `handle` as the tail
    ///
    /// # Errors
    /// * `Error::StaleHandle` - handle was not issued by this list or its node is gone
    pub fn move_to_end(&mut self, handle: NodeHandle) -> Result<()> {
        let idx = self.resolve(handle)?;
        if self.tail == Some(idx) {
            return Ok(());
        }

        self.unlink(idx);
        self.link_back(idx);
        Ok(())
    }

    /// Unlink the tail node and return its value
    ///
    /// # Errors
    /// * `Error::EmptyList` - the list has no nodes
    pub fn remove_from_tail(&mut self) -> Result<T> {
        let idx = self.tail.ok_or(Error::EmptyList)?;
        self.release(idx)
    }

    /// Unlink the head node and return its value
    ///
    /// # Errors
    /// * `Error::EmptyList` - the list has no nodes
    pub fn remove_from_head(&mut self) -> Result<T> {
        let idx = self.head.ok_or(Error::EmptyList)?;
        self.release(idx)
    }

    /// Unlink the node behind `handle` and return its value
    ///
    /// # Errors
    /// * `Error::StaleHandle` - handle was not issued by this list or its node is gone
    pub fn remove(&mut self, handle: NodeHandle) -> Result<T> {
        let idx = self.resolve(handle)?;
        self.release(idx)
    }

    /// Check whether `handle` refers to a live node of this list
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.resolve(handle).is_ok()
    }

    /// Borrow the value behind `handle`
    pub fn get(&self, handle: NodeHandle) -> Option<&T> {
        let idx = self.resolve(handle).ok()?;
        self.node(idx).map(|node| &node.value)
    }

    /// Mutably borrow the value behind `handle`
    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut T> {
        let idx = self.resolve(handle).ok()?;
        self.node_mut(idx).map(|node| &mut node.value)
    }

    /// Value at the head
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|idx| self.node(idx)).map(|node| &node.value)
    }

    /// Value at the tail
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|idx| self.node(idx)).map(|node| &node.value)
    }

    /// Handle of the head node
    pub fn front_handle(&self) -> Option<NodeHandle> {
        self.head.map(|idx| self.handle_at(idx))
    }

    /// Handle of the tail node
    pub fn back_handle(&self) -> Option<NodeHandle> {
        self.tail.map(|idx| self.handle_at(idx))
    }

    /// Iterate values from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Drop every node. Handles issued before the call become stale.
    pub fn clear(&mut self) {
        self.free_list.clear();
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation += 1;
            }
            self.free_list.push(idx);
        }
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Walk the list and panic if any link is inconsistent
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let occupied = self.slots.iter().filter(|slot| slot.node.is_some()).count();
        assert_eq!(occupied, self.len, "occupied slots != len");

        if self.len == 0 {
            assert!(self.head.is_none() && self.tail.is_none());
            return;
        }

        let mut prev = None;
        let mut current = self.head;
        let mut seen = 0;
        while let Some(idx) = current {
            let node = self.node(idx).expect("linked slot must be occupied");
            assert_eq!(node.prev, prev, "prev link mismatch at slot {}", idx);
            seen += 1;
            assert!(seen <= self.len, "cycle detected");
            prev = Some(idx);
            current = node.next;
        }
        assert_eq!(seen, self.len, "chain length != len");
        assert_eq!(prev, self.tail, "last node is not the tail");
    }

    fn resolve(&self, handle: NodeHandle) -> Result<usize> {
        if handle.list != self.id {
            return Err(Error::StaleHandle);
        }
        match self.slots.get(handle.index) {
            Some(slot) if slot.generation == handle.generation && slot.node.is_some() => {
                Ok(handle.index)
            }
            _ => Err(Error::StaleHandle),
        }
    }

    fn handle_at(&self, idx: usize) -> NodeHandle {
        NodeHandle {
            list: self.id,
            index: idx,
            generation: self.slots[idx].generation,
        }
    }

    fn node(&self, idx: usize) -> Option<&Node<T>> {
        self.slots.get(idx).and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(idx).and_then(|slot| slot.node.as_mut())
    }

    fn alloc_node(&mut self, value: T) -> usize {
        let node = Node {
            value,
            prev: None,
            next: None,
        };

        if let Some(idx) = self.free_list.pop() {
            self.slots[idx].node = Some(node);
            idx
        } else {
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            self.slots.len() - 1
        }
    }

    fn release(&mut self, idx: usize) -> Result<T> {
        self.unlink(idx);
        let slot = self.slots.get_mut(idx).ok_or(Error::StaleHandle)?;
        let node = slot.node.take().ok_or(Error::StaleHandle)?;
        slot.generation += 1;
        self.free_list.push(idx);
        self.len -= 1;
        Ok(node.value)
    }

    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(idx) {
            node.prev = None;
            node.next = old_head;
        }

        match old_head {
            Some(head_idx) => {
                if let Some(head) = self.node_mut(head_idx) {
                    head.prev = Some(idx);
                }
            }
            None => self.tail = Some(idx),
        }

        self.head = Some(idx);
    }

    fn link_back(&mut self, idx: usize) {
        let old_tail = self.tail;
        if let Some(node) = self.node_mut(idx) {
            node.prev = old_tail;
            node.next = None;
        }

        match old_tail {
            Some(tail_idx) => {
                if let Some(tail) = self.node_mut(tail_idx) {
                    tail.next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }

        self.tail = Some(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match self.node(idx) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = self.node_mut(prev_idx) {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = self.node_mut(next_idx) {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(idx) {
            node.prev = None;
            node.next = None;
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over list values from head to tail
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.current?)?;
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
