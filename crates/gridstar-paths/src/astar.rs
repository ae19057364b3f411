use gridstar_core::Coordinate;

use crate::frontier::{Frontier, Visited};
use crate::node::{NodeArena, NodeId, make_node};
use crate::traits::AstarPather;

/// Counters collected over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes moved from the frontier to the visited set.
    pub expanded: usize,
    /// Distinct coordinates discovered (arena size).
    pub discovered: usize,
    /// Open nodes rewritten in place with a cheaper route.
    pub updated: usize,
    /// Visited nodes reopened because a cheaper route was found.
    pub reopened: usize,
}

/// Where the search loop stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Running,
    /// The goal was finalized as the given node.
    Succeeded(NodeId),
    /// The frontier ran dry before reaching the goal.
    Failed,
}

/// Result of [`SearchEngine::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Cells from start to goal inclusive, or `None` when unreachable.
    pub path: Option<Vec<Coordinate>>,
    pub stats: SearchStats,
}

/// Single-use A* search over an [`AstarPather`].
///
/// Every engine starts with an empty frontier, visited set and arena, and
/// [`run`](Self::run) consumes it, so no state carries over between
/// searches.
pub struct SearchEngine<'a, P> {
    pather: &'a P,
    goal: Coordinate,
    arena: NodeArena,
    frontier: Frontier,
    visited: Visited,
    stats: SearchStats,
    state: SearchState,
    nbuf: Vec<Coordinate>,
}

impl<'a, P: AstarPather> SearchEngine<'a, P> {
    /// Prepare a search and seed the start node.
    ///
    /// A start or goal outside the pather's area makes the search fail
    /// immediately. A start on an obstacle is still seeded and searched
    /// from; only its neighbors are filtered.
    pub fn new(pather: &'a P) -> Self {
        let start = pather.start();
        let goal = pather.goal();
        let mut engine = Self {
            pather,
            goal,
            arena: NodeArena::new(),
            frontier: Frontier::new(),
            visited: Visited::new(),
            stats: SearchStats::default(),
            state: SearchState::Running,
            nbuf: Vec::with_capacity(4),
        };

        if !pather.contains(start) || !pather.contains(goal) {
            log::debug!("astar: {start} -> {goal} has an endpoint outside the grid");
            engine.state = SearchState::Failed;
            return engine;
        }

        let id = engine.arena.push(make_node(pather, start, None));
        engine.frontier.push(id, &engine.arena);
        engine.stats.discovered = 1;
        engine
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Advance the search by one expansion.
    pub fn step(&mut self) -> SearchState {
        if self.state != SearchState::Running {
            return self.state;
        }

        let Some(current) = self.frontier.pop_best(&self.arena) else {
            self.state = SearchState::Failed;
            return self.state;
        };

        let coord = self.arena[current].coord;
        self.visited.insert(coord, current);
        self.stats.expanded += 1;
        log::trace!("astar: expand {}", self.arena[current]);

        self.expand(current);

        if let Some(goal_id) = self.visited.get(self.goal) {
            self.state = SearchState::Succeeded(goal_id);
        }
        self.state
    }

    /// Run to completion and reconstruct the path.
    pub fn run(mut self) -> SearchOutcome {
        log::debug!(
            "astar: searching {} -> {}",
            self.pather.start(),
            self.goal
        );
        while self.step() == SearchState::Running {}

        let path = match self.state {
            SearchState::Succeeded(goal_id) => Some(PathBuilder::new(&self.arena).build(goal_id)),
            _ => None,
        };
        match &path {
            Some(p) => log::debug!("astar: found path of {} cells ({:?})", p.len(), self.stats),
            None => log::debug!("astar: goal unreachable ({:?})", self.stats),
        }
        SearchOutcome {
            path,
            stats: self.stats,
        }
    }

    fn expand(&mut self, current: NodeId) {
        let center = self.arena[current].coord;
        let parent = Some((current, self.arena[current].g));

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.pather.neighbors(center, &mut nbuf);

        for &np in nbuf.iter() {
            self.relax(np, parent);
        }

        self.nbuf = nbuf;
    }

    /// Apply one neighbor candidate to the visited set and frontier.
    fn relax(&mut self, coord: Coordinate, parent: Option<(NodeId, i32)>) {
        let candidate = make_node(self.pather, coord, parent);

        if let Some(closed) = self.visited.get(coord) {
            if candidate.g >= self.arena[closed].g {
                return;
            }
            // Unreachable with a consistent heuristic, handled anyway.
            self.visited.remove(coord);
            self.arena[closed].update_from(&candidate);
            self.frontier.push(closed, &self.arena);
            self.stats.reopened += 1;
            log::trace!("astar: reopen {}", self.arena[closed]);
            return;
        }

        if let Some(open) = self.frontier.get(coord) {
            if candidate.g < self.arena[open].g {
                self.arena[open].update_from(&candidate);
                self.frontier.push(open, &self.arena);
                self.stats.updated += 1;
            }
            return;
        }

        let id = self.arena.push(candidate);
        self.frontier.push(id, &self.arena);
        self.stats.discovered += 1;
    }
}

/// Walks parent links back from a finalized node.
pub struct PathBuilder<'a> {
    arena: &'a NodeArena,
}

impl<'a> PathBuilder<'a> {
    pub fn new(arena: &'a NodeArena) -> Self {
        Self { arena }
    }

    /// Coordinates from the root of `end`'s chain to `end`, inclusive.
    pub fn build(&self, end: NodeId) -> Vec<Coordinate> {
        let mut path = Vec::new();
        let mut cur = Some(end);
        while let Some(id) = cur {
            let node = &self.arena[id];
            path.push(node.coord);
            cur = node.parent;
        }
        path.reverse();
        path
    }
}
