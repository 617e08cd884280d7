use routefind_core::Point;

use crate::distance::{Cost, octile, squared_euclidean};

/// Expansion budget used when none is given.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Estimate of the remaining cost from a node to the goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Heuristic {
    /// Squared straight-line distance. Not in the same units as the step
    /// costs, so the search leans strongly towards the goal and the route
    /// is not guaranteed to be the cheapest one.
    #[default]
    SquaredEuclidean,
    /// Octile distance in step-cost units. Never overestimates, so routes
    /// are optimal.
    Octile,
}

impl Heuristic {
    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> Cost {
        match self {
            Self::SquaredEuclidean => squared_euclidean(from, to),
            Self::Octile => octile(from, to),
        }
    }
}

/// Tunables for [`Grid::find_route`](crate::Grid::find_route).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Maximum number of node expansions before giving up.
    pub max_iterations: usize,
    /// Heuristic used for every discovered node except the start.
    pub heuristic: Heuristic,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            heuristic: Heuristic::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.max_iterations, 10_000);
        assert_eq!(cfg.heuristic, Heuristic::SquaredEuclidean);
    }

    #[test]
    fn estimates() {
        let a = Point::new(1, 0);
        let b = Point::new(9, 2);
        assert_eq!(Heuristic::SquaredEuclidean.estimate(a, b), 68);
        assert_eq!(Heuristic::Octile.estimate(a, b), 2 * 14 + 6 * 10);
    }
}
