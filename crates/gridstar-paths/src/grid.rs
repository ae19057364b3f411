//! The immutable search space: bounds, endpoints and obstacles.

use std::collections::HashSet;

use gridstar_core::{Coordinate, Direction, manhattan};

use crate::error::GridError;
use crate::traits::{AstarPather, Pather};

/// A bounded rectangular grid with static obstacles.
///
/// A cell is traversable iff `0 <= x < width`, `0 <= y < height` and it is
/// not an obstacle. The start and goal are not required to be traversable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridSpec", into = "GridSpec")
)]
pub struct Grid {
    width: i32,
    height: i32,
    start: Coordinate,
    goal: Coordinate,
    obstacles: HashSet<Coordinate>,
}

impl Grid {
    /// Build a grid, rejecting negative dimensions and endpoints with a
    /// negative component.
    pub fn new(
        width: i32,
        height: i32,
        start: Coordinate,
        goal: Coordinate,
        obstacles: impl IntoIterator<Item = Coordinate>,
    ) -> Result<Self, GridError> {
        if height < 0 {
            return Err(GridError::NegativeHeight(height));
        }
        if width < 0 {
            return Err(GridError::NegativeWidth(width));
        }
        if !start.is_non_negative() {
            return Err(GridError::NegativeStart(start));
        }
        if !goal.is_non_negative() {
            return Err(GridError::NegativeGoal(goal));
        }
        Ok(Self {
            width,
            height,
            start,
            goal,
            obstacles: obstacles.into_iter().collect(),
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Coordinate {
        self.goal
    }

    #[inline]
    pub fn obstacles(&self) -> &HashSet<Coordinate> {
        &self.obstacles
    }

    /// Whether `c` is inside the grid bounds.
    #[inline]
    pub fn contains(&self, c: Coordinate) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    #[inline]
    pub fn is_obstacle(&self, c: Coordinate) -> bool {
        self.obstacles.contains(&c)
    }

    /// Whether `c` is in bounds and free.
    #[inline]
    pub fn is_passable(&self, c: Coordinate) -> bool {
        self.contains(c) && !self.is_obstacle(c)
    }

    /// Whether the cell one step from `c` in direction `dir` may be entered.
    ///
    /// Left/Down test the lower bound and Right/Up the upper bound of the
    /// moving axis; the other axis is checked as well, so a neighbor is only
    /// ever reported traversable when it is fully in bounds.
    pub fn is_traversable(&self, dir: Direction, c: Coordinate) -> bool {
        let n = c.step(dir);
        let moving_axis_ok = match dir {
            Direction::Left => n.x >= 0,
            Direction::Down => n.y >= 0,
            Direction::Right => n.x < self.width,
            Direction::Up => n.y < self.height,
        };
        moving_axis_ok && self.is_passable(n)
    }

    #[inline]
    pub fn is_start(&self, c: Coordinate) -> bool {
        c == self.start
    }

    #[inline]
    pub fn is_goal(&self, c: Coordinate) -> bool {
        c == self.goal
    }

    /// Manhattan distance from `c` to the goal, ignoring obstacles.
    #[inline]
    pub fn heuristic(&self, c: Coordinate) -> i32 {
        manhattan(c, self.goal)
    }

    /// Manhattan distance from `c` to the start, ignoring obstacles.
    #[inline]
    pub fn distance_from_start(&self, c: Coordinate) -> i32 {
        manhattan(c, self.start)
    }
}

impl Pather for Grid {
    fn neighbors(&self, c: Coordinate, buf: &mut Vec<Coordinate>) {
        for dir in Direction::ALL {
            if self.is_traversable(dir, c) {
                buf.push(c.step(dir));
            }
        }
    }

    fn contains(&self, c: Coordinate) -> bool {
        Grid::contains(self, c)
    }
}

impl AstarPather for Grid {
    fn start(&self) -> Coordinate {
        self.start
    }

    fn goal(&self) -> Coordinate {
        self.goal
    }

    fn estimate(&self, from: Coordinate, to: Coordinate) -> i32 {
        manhattan(from, to)
    }
}

// ---------------------------------------------------------------------------
// GridSpec
// ---------------------------------------------------------------------------

/// Plain, unvalidated description of a [`Grid`].
///
/// Converting into a `Grid` runs the same validation as [`Grid::new`].
/// Obstacles are kept sorted so that equal grids produce equal specs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    pub width: i32,
    pub height: i32,
    pub start: Coordinate,
    pub goal: Coordinate,
    #[cfg_attr(feature = "serde", serde(default))]
    pub obstacles: Vec<Coordinate>,
}

impl TryFrom<GridSpec> for Grid {
    type Error = GridError;

    fn try_from(spec: GridSpec) -> Result<Self, Self::Error> {
        Grid::new(spec.width, spec.height, spec.start, spec.goal, spec.obstacles)
    }
}

impl From<Grid> for GridSpec {
    fn from(grid: Grid) -> Self {
        let mut obstacles: Vec<Coordinate> = grid.obstacles.into_iter().collect();
        obstacles.sort();
        Self {
            width: grid.width,
            height: grid.height,
            start: grid.start,
            goal: grid.goal,
            obstacles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn grid_5x5(obstacles: &[Coordinate]) -> Grid {
        Grid::new(5, 5, c(0, 0), c(4, 4), obstacles.iter().copied()).unwrap()
    }

    #[test]
    fn rejects_negative_dimensions() {
        assert_eq!(
            Grid::new(5, -1, c(0, 0), c(1, 1), []),
            Err(GridError::NegativeHeight(-1))
        );
        assert_eq!(
            Grid::new(-3, 5, c(0, 0), c(1, 1), []),
            Err(GridError::NegativeWidth(-3))
        );
    }

    #[test]
    fn height_checked_before_width() {
        assert_eq!(
            Grid::new(-1, -2, c(0, 0), c(0, 0), []),
            Err(GridError::NegativeHeight(-2))
        );
    }

    #[test]
    fn rejects_negative_endpoints() {
        assert_eq!(
            Grid::new(5, 5, c(-1, 0), c(1, 1), []),
            Err(GridError::NegativeStart(c(-1, 0)))
        );
        assert_eq!(
            Grid::new(5, 5, c(0, 0), c(1, -4), []),
            Err(GridError::NegativeGoal(c(1, -4)))
        );
    }

    #[test]
    fn accepts_zero_size_and_out_of_bounds_endpoints() {
        assert!(Grid::new(0, 0, c(0, 0), c(0, 0), []).is_ok());
        assert!(Grid::new(5, 5, c(9, 9), c(7, 0), []).is_ok());
    }

    #[test]
    fn traversable_respects_bounds() {
        let g = grid_5x5(&[]);
        assert!(!g.is_traversable(Direction::Left, c(0, 2)));
        assert!(!g.is_traversable(Direction::Down, c(2, 0)));
        assert!(!g.is_traversable(Direction::Right, c(4, 2)));
        assert!(!g.is_traversable(Direction::Up, c(2, 4)));
        assert!(g.is_traversable(Direction::Left, c(1, 2)));
        assert!(g.is_traversable(Direction::Down, c(2, 1)));
        assert!(g.is_traversable(Direction::Right, c(3, 2)));
        assert!(g.is_traversable(Direction::Up, c(2, 3)));
    }

    #[test]
    fn traversable_checks_cross_axis() {
        // Moving right along a row that is itself outside the grid.
        let g = grid_5x5(&[]);
        assert!(!g.is_traversable(Direction::Right, c(1, 7)));
        assert!(!g.is_traversable(Direction::Left, c(3, -1)));
    }

    #[test]
    fn traversable_respects_obstacles() {
        let g = grid_5x5(&[c(2, 3)]);
        assert!(!g.is_traversable(Direction::Up, c(2, 2)));
        assert!(!g.is_traversable(Direction::Right, c(1, 3)));
        assert!(!g.is_passable(c(2, 3)));
        assert!(g.is_obstacle(c(2, 3)));
        assert!(g.contains(c(2, 3)));
    }

    #[test]
    fn neighbors_in_expansion_order() {
        let g = grid_5x5(&[c(2, 3)]);
        let mut buf = Vec::new();
        Pather::neighbors(&g, c(2, 2), &mut buf);
        assert_eq!(buf, vec![c(1, 2), c(3, 2), c(2, 1)]);

        buf.clear();
        Pather::neighbors(&g, c(0, 0), &mut buf);
        assert_eq!(buf, vec![c(0, 1), c(1, 0)]);
    }

    #[test]
    fn endpoints_and_heuristics() {
        let g = grid_5x5(&[]);
        assert!(g.is_start(c(0, 0)));
        assert!(g.is_goal(c(4, 4)));
        assert!(!g.is_goal(c(0, 0)));
        assert_eq!(g.heuristic(c(0, 0)), 8);
        assert_eq!(g.heuristic(c(4, 4)), 0);
        assert_eq!(g.distance_from_start(c(2, 3)), 5);
        assert_eq!(g.estimate(c(1, 1), c(3, 0)), 3);
    }

    #[test]
    fn spec_conversion_validates() {
        let spec = GridSpec {
            width: 3,
            height: -1,
            ..GridSpec::default()
        };
        assert_eq!(Grid::try_from(spec), Err(GridError::NegativeHeight(-1)));
    }

    #[test]
    fn spec_sorts_obstacles() {
        let g = grid_5x5(&[c(3, 1), c(0, 2), c(1, 0)]);
        let spec = GridSpec::from(g.clone());
        assert_eq!(spec.obstacles, vec![c(0, 2), c(1, 0), c(3, 1)]);
        assert_eq!(Grid::try_from(spec).unwrap(), g);
    }
}
