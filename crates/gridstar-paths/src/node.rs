//! Weighted search nodes and the per-search arena that owns them.

use std::fmt;
use std::ops::{Index, IndexMut};

use gridstar_core::Coordinate;

use crate::traits::AstarPather;

/// Index of a [`SearchNode`] inside a [`NodeArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One cell reached during search.
///
/// `g` counts the cells on the route including this one, so the start has
/// `g == 1`. Nodes are identified by their coordinate; they are looked up
/// through coordinate-keyed maps and never compared with each other.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub coord: Coordinate,
    pub parent: Option<NodeId>,
    pub g: i32,
    pub h: i32,
}

impl SearchNode {
    /// Total score `g + h`.
    #[inline]
    pub fn f(&self) -> i32 {
        self.g + self.h
    }

    /// Take cost, heuristic and parent from `other`, keeping the coordinate.
    #[inline]
    pub fn update_from(&mut self, other: &SearchNode) {
        debug_assert_eq!(self.coord, other.coord);
        self.g = other.g;
        self.h = other.h;
        self.parent = other.parent;
    }
}

impl fmt::Display for SearchNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} g(n):{} h(n):{} f(n):{}",
            self.coord,
            self.g,
            self.h,
            self.f()
        )
    }
}

/// Build a node for `coord` reached from `parent` (given as its id and `g`).
pub fn make_node<P: AstarPather>(
    pather: &P,
    coord: Coordinate,
    parent: Option<(NodeId, i32)>,
) -> SearchNode {
    SearchNode {
        coord,
        parent: parent.map(|(id, _)| id),
        g: parent.map_or(0, |(_, g)| g) + 1,
        h: pather.estimate(coord, pather.goal()),
    }
}

/// Growable storage for the nodes of a single search.
///
/// Parents are stored as [`NodeId`]s into this arena, so rewriting a parent
/// is a plain field write.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `node` and return its id.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Index<NodeId> for NodeArena {
    type Output = SearchNode;

    #[inline]
    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for NodeArena {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0]
    }
}
