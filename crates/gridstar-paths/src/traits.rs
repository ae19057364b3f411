use gridstar_core::Coordinate;

/// Minimal search-space interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the traversable neighbors of `c` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, c: Coordinate, buf: &mut Vec<Coordinate>);

    /// Whether `c` lies inside the searchable area. Unbounded spaces keep the
    /// default.
    fn contains(&self, _c: Coordinate) -> bool {
        true
    }
}

/// Pather with fixed endpoints and a heuristic, as needed by A*.
///
/// Every move has unit cost.
pub trait AstarPather: Pather {
    /// Where the search begins.
    fn start(&self) -> Coordinate;

    /// Where the search ends.
    fn goal(&self) -> Coordinate;

    /// Heuristic estimate of the remaining distance from `from` to `to`.
    /// Should never overestimate the true cost (admissible).
    fn estimate(&self, from: Coordinate, to: Coordinate) -> i32;
}
