use std::fmt;

use routefind_core::Point;

/// Reasons a route search can fail.
///
/// No variant carries a partial route. The grid stays usable after any of
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The start or end lies outside the grid. Raised before any search work.
    OutOfBounds { pos: Point, dimensions: Point },
    /// Every cell reachable from `start` was expanded without meeting `end`,
    /// or one of the endpoints is a wall.
    NoRouteExists { start: Point, end: Point },
    /// The expansion budget ran out. A route may still exist.
    IterationLimitExceeded { limit: usize },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, dimensions } => write!(
                f,
                "position {pos} is outside the {}x{} grid",
                dimensions.x, dimensions.y
            ),
            Self::NoRouteExists { start, end } => {
                write!(f, "no route exists from {start} to {end}")
            }
            Self::IterationLimitExceeded { limit } => {
                write!(f, "route search gave up after {limit} iterations")
            }
        }
    }
}

impl std::error::Error for RouteError {}
