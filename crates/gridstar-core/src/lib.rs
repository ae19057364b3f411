//! **gridstar-core** — geometry primitives for 4-connected grid search.
//!
//! This crate provides the value types shared across the *gridstar*
//! workspace: integer cell coordinates, the four cardinal directions, and the
//! Manhattan metric.

pub mod geom;

pub use geom::{Coordinate, Direction, manhattan};
