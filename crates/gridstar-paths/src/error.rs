use std::fmt;

use gridstar_core::Coordinate;

/// Errors raised when a [`Grid`](crate::Grid) is described with invalid
/// dimensions or endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Height was below zero.
    NegativeHeight(i32),
    /// Width was below zero.
    NegativeWidth(i32),
    /// Start coordinate had a negative component.
    NegativeStart(Coordinate),
    /// Goal coordinate had a negative component.
    NegativeGoal(Coordinate),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeHeight(h) => write!(f, "grid: height must be >= 0, got {h}"),
            Self::NegativeWidth(w) => write!(f, "grid: width must be >= 0, got {w}"),
            Self::NegativeStart(c) => {
                write!(f, "grid: start must have non-negative components, got {c}")
            }
            Self::NegativeGoal(c) => {
                write!(f, "grid: goal must have non-negative components, got {c}")
            }
        }
    }
}

impl std::error::Error for GridError {}
