//! A* shortest-path search on bounded 4-connected grids.
//!
//! The entry point is [`find_path`]: give it the grid size, the endpoints and
//! an optional obstacle set, and it returns the cells of a shortest path from
//! start to goal (both inclusive), or `None` when the goal cannot be reached.
//!
//! ```
//! use std::collections::HashSet;
//! use gridstar_core::Coordinate;
//! use gridstar_paths::find_path;
//!
//! let walls = HashSet::from([(2, 3), (2, 4), (4, 3)].map(Coordinate::from));
//! let path = find_path(5, 5, Coordinate::new(0, 0), Coordinate::new(4, 4), Some(&walls))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(path.len(), 9);
//! ```
//!
//! # Building blocks
//!
//! | Item | Role |
//! |---|---|
//! | [`Grid`] | Validated search space, implements [`AstarPather`] |
//! | [`SearchNode`] / [`NodeArena`] | Weighted nodes, parents stored as [`NodeId`]s |
//! | [`Frontier`] / [`Visited`] | Open and closed sets keyed by coordinate |
//! | [`SearchEngine`] | The A* loop, generic over [`AstarPather`] |
//! | [`PathBuilder`] | Parent-chain walk from the goal back to the start |

mod astar;
mod error;
mod frontier;
mod grid;
mod node;
mod traits;

use std::collections::HashSet;

use gridstar_core::Coordinate;

pub use astar::{PathBuilder, SearchEngine, SearchOutcome, SearchState, SearchStats};
pub use error::GridError;
pub use frontier::{Frontier, Visited};
pub use grid::{Grid, GridSpec};
pub use node::{NodeArena, NodeId, SearchNode, make_node};
pub use traits::{AstarPather, Pather};

/// Find a shortest 4-directional path from `start` to `goal`.
///
/// `obstacles` of `None` means no obstacles. Returns `Ok(None)` when the goal
/// is unreachable, including when `start` or `goal` lies outside the grid.
/// Fails only for negative dimensions or endpoints with a negative component.
pub fn find_path(
    width: i32,
    height: i32,
    start: Coordinate,
    goal: Coordinate,
    obstacles: Option<&HashSet<Coordinate>>,
) -> Result<Option<Vec<Coordinate>>, GridError> {
    find_path_with_stats(width, height, start, goal, obstacles).map(|out| out.path)
}

/// Like [`find_path`], also reporting the search counters.
pub fn find_path_with_stats(
    width: i32,
    height: i32,
    start: Coordinate,
    goal: Coordinate,
    obstacles: Option<&HashSet<Coordinate>>,
) -> Result<SearchOutcome, GridError> {
    let grid = Grid::new(
        width,
        height,
        start,
        goal,
        obstacles.into_iter().flatten().copied(),
    )?;
    Ok(SearchEngine::new(&grid).run())
}
