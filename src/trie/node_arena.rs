//! A slot arena for trie nodes.
//!
//! Nodes are addressed by [`NodeId`] instead of references, so failure and
//! output links are plain indices and never own anything. Slots released by
//! pruning go on a free-list and are reused by later allocations.

use std::ops::{Index, IndexMut};

/// Index of a node inside its trie's arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node. Allocated first and never released.
    pub const ROOT: NodeId = NodeId(0);

    /// Returns the raw slot index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// An arena that hands out stable indices and recycles released slots.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<T> {
    slots: Vec<T>,
    free_list: Vec<NodeId>,
}

impl<T> NodeArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        NodeArena {
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Stores a value, reusing a released slot when one is available.
    pub fn alloc(&mut self, value: T) -> NodeId {
        if let Some(id) = self.free_list.pop() {
            self.slots[id.0] = value;
            id
        } else {
            self.slots.push(value);
            NodeId(self.slots.len() - 1)
        }
    }

    /// Releases a slot. The slot is overwritten with `blank` so the released
    /// value is dropped now rather than on reuse.
    pub fn release(&mut self, id: NodeId, blank: T) {
        debug_assert!(id != NodeId::ROOT, "release: root is never released");
        debug_assert!(!self.free_list.contains(&id), "release: slot already free");
        self.slots[id.0] = blank;
        self.free_list.push(id);
    }

    /// Returns the value in a live slot, or None if `id` is out of range or
    /// released.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        if self.free_list.contains(&id) {
            return None;
        }
        self.slots.get(id.0)
    }

    /// Returns the number of live values in this arena.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Returns the number of slots, live or free.
    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of released slots waiting for reuse.
    pub fn free_len(&self) -> usize {
        self.free_list.len()
    }

    /// Drops every value.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        &self.slots[id.0]
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.slots[id.0]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn first_alloc_is_root() {
        let mut arena = NodeArena::new();
        assert_eq!(arena.alloc("root"), NodeId::ROOT);
        assert_eq!(arena.alloc("a").index(), 1);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn released_slots_are_reused() {
        let mut arena = NodeArena::new();
        arena.alloc(0);
        let a = arena.alloc(1);
        let b = arena.alloc(2);
        arena.release(a, -1);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.free_len(), 1);
        assert_eq!(arena[a], -1);

        let c = arena.alloc(3);
        assert_eq!(c, a);
        assert_eq!(arena[c], 3);
        assert_eq!(arena[b], 2);
        assert_eq!(arena.capacity(), 3);
        assert_eq!(arena.free_len(), 0);
    }

    #[test]
    fn get_skips_released_and_missing_slots() {
        let mut arena = NodeArena::new();
        arena.alloc('r');
        let a = arena.alloc('a');
        assert_eq!(arena.get(a), Some(&'a'));
        arena.release(a, ' ');
        assert_eq!(arena.get(a), None);
        arena.clear();
        assert_eq!(arena.get(NodeId::ROOT), None);
        assert_eq!(arena.get(a), None);
    }
}
