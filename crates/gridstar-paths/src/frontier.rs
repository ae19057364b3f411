//! Open ([`Frontier`]) and closed ([`Visited`]) node collections.
//!
//! Both are keyed by [`Coordinate`] and hold [`NodeId`]s into the search's
//! [`NodeArena`]; the node data itself lives only in the arena.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use gridstar_core::Coordinate;

use crate::node::{NodeArena, NodeId, SearchNode};

// ---------------------------------------------------------------------------
// Heap entry
// ---------------------------------------------------------------------------

/// Snapshot of a node's scores at the time it was queued.
///
/// A node whose cost improves is queued again; the older snapshot becomes
/// stale and is dropped when it surfaces.
#[derive(Clone, Copy, Eq, PartialEq)]
struct QueuedNode {
    id: NodeId,
    coord: Coordinate,
    g: i32,
    f: i32,
    h: i32,
}

impl QueuedNode {
    fn of(id: NodeId, node: &SearchNode) -> Self {
        Self {
            id,
            coord: node.coord,
            g: node.g,
            f: node.f(),
            h: node.h,
        }
    }
}

impl Ord for QueuedNode {
    /// Smallest `f` first, then smallest `h`, then the lexicographically
    /// smallest coordinate. Reversed because `BinaryHeap` is a max-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.coord.cmp(&self.coord))
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for QueuedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// Discovered nodes that are not yet finalized.
#[derive(Default)]
pub struct Frontier {
    members: HashMap<Coordinate, NodeId>,
    queue: BinaryHeap<QueuedNode>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct coordinates currently open.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The open node at `coord`, if any.
    #[inline]
    pub fn get(&self, coord: Coordinate) -> Option<NodeId> {
        self.members.get(&coord).copied()
    }

    /// Open the node `id`, or re-queue it after its scores changed in the
    /// arena.
    pub fn push(&mut self, id: NodeId, arena: &NodeArena) {
        let node = &arena[id];
        match self.members.entry(node.coord) {
            Entry::Occupied(e) => debug_assert_eq!(*e.get(), id),
            Entry::Vacant(e) => {
                e.insert(id);
            }
        }
        self.queue.push(QueuedNode::of(id, node));
    }

    /// Remove and return the open node with the best score.
    pub fn pop_best(&mut self, arena: &NodeArena) -> Option<NodeId> {
        while let Some(entry) = self.queue.pop() {
            // Skip stale snapshots.
            if self.members.get(&entry.coord) != Some(&entry.id) || arena[entry.id].g != entry.g {
                continue;
            }
            self.members.remove(&entry.coord);
            return Some(entry.id);
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Visited
// ---------------------------------------------------------------------------

/// Finalized nodes.
#[derive(Default)]
pub struct Visited {
    members: HashMap<Coordinate, NodeId>,
}

impl Visited {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn get(&self, coord: Coordinate) -> Option<NodeId> {
        self.members.get(&coord).copied()
    }

    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.members.contains_key(&coord)
    }

    /// Finalize `id` at `coord`.
    #[inline]
    pub fn insert(&mut self, coord: Coordinate, id: NodeId) {
        self.members.insert(coord, id);
    }

    /// Reopen: drop `coord` from the finalized set.
    #[inline]
    pub fn remove(&mut self, coord: Coordinate) -> Option<NodeId> {
        self.members.remove(&coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(x: i32, y: i32, g: i32, h: i32) -> SearchNode {
        SearchNode {
            coord: Coordinate::new(x, y),
            parent: None,
            g,
            h,
        }
    }

    #[test]
    fn pops_lowest_f_first() {
        let mut arena = NodeArena::new();
        let mut open = Frontier::new();
        let a = arena.push(node(0, 0, 5, 5));
        let b = arena.push(node(1, 0, 2, 3));
        let c = arena.push(node(2, 0, 4, 4));
        for id in [a, b, c] {
            open.push(id, &arena);
        }
        assert_eq!(open.len(), 3);
        assert_eq!(open.pop_best(&arena), Some(b));
        assert_eq!(open.pop_best(&arena), Some(c));
        assert_eq!(open.pop_best(&arena), Some(a));
        assert_eq!(open.pop_best(&arena), None);
        assert!(open.is_empty());
    }

    #[test]
    fn ties_prefer_lower_h_then_smaller_coordinate() {
        let mut arena = NodeArena::new();
        let mut open = Frontier::new();
        let high_h = arena.push(node(0, 0, 2, 4));
        let low_h_far = arena.push(node(3, 1, 4, 2));
        let low_h_near = arena.push(node(1, 3, 4, 2));
        for id in [high_h, low_h_far, low_h_near] {
            open.push(id, &arena);
        }
        assert_eq!(open.pop_best(&arena), Some(low_h_near));
        assert_eq!(open.pop_best(&arena), Some(low_h_far));
        assert_eq!(open.pop_best(&arena), Some(high_h));
    }

    #[test]
    fn improved_node_is_requeued_once() {
        let mut arena = NodeArena::new();
        let mut open = Frontier::new();
        let a = arena.push(node(0, 0, 9, 1));
        let b = arena.push(node(1, 0, 5, 1));
        open.push(a, &arena);
        open.push(b, &arena);

        arena[a].g = 2;
        open.push(a, &arena);
        assert_eq!(open.len(), 2);
        assert_eq!(open.get(Coordinate::new(0, 0)), Some(a));

        assert_eq!(open.pop_best(&arena), Some(a));
        assert_eq!(open.pop_best(&arena), Some(b));
        // The stale snapshot of `a` is discarded.
        assert_eq!(open.pop_best(&arena), None);
    }

    #[test]
    fn visited_insert_and_reopen() {
        let mut arena = NodeArena::new();
        let mut closed = Visited::new();
        let a = arena.push(node(2, 2, 3, 1));
        closed.insert(Coordinate::new(2, 2), a);
        assert!(closed.contains(Coordinate::new(2, 2)));
        assert_eq!(closed.get(Coordinate::new(2, 2)), Some(a));
        assert_eq!(closed.len(), 1);

        assert_eq!(closed.remove(Coordinate::new(2, 2)), Some(a));
        assert!(!closed.contains(Coordinate::new(2, 2)));
        assert!(closed.is_empty());
    }
}
