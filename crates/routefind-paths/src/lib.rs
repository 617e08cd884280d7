//! A* route finding on fixed-size 2D grids.
//!
//! A [`Grid`] owns every [`Node`] of the search space. Walls are allocated
//! when the grid is built; all other nodes are allocated lazily the first
//! time a search reaches them, so large mostly-unvisited grids stay cheap.
//!
//! Movement is 8-connected: orthogonal steps cost [`ORTHOGONAL_COST`] and
//! diagonal steps [`DIAGONAL_COST`]. The heuristic is chosen through
//! [`SearchConfig`].
//!
//! ```
//! use routefind_core::Point;
//! use routefind_paths::Grid;
//!
//! let walls: Vec<Point> = (1..10).map(|y| Point::new(5, y)).collect();
//! let mut grid = Grid::new(10, 10, &walls);
//! let route = grid.find_route(Point::new(1, 0), Point::new(9, 2)).unwrap();
//! assert!(route.contains(&Point::new(5, 0)));
//! ```

mod astar;
mod config;
mod distance;
mod error;
mod grid;
mod neighbors;
mod node;

pub use config::{DEFAULT_MAX_ITERATIONS, Heuristic, SearchConfig};
pub use distance::{
    Cost, DIAGONAL_COST, ORTHOGONAL_COST, chebyshev, octile, squared_euclidean, step_cost,
};
pub use error::RouteError;
pub use grid::Grid;
pub use neighbors::Neighbors;
pub use node::{Node, Parent};
