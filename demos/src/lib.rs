//! Companions for the routefind crates: text maps, route rendering,
//! random obstacle maps and JSON scenarios.
//!
//! The `route` binary ties these together.

pub mod map;
pub mod render;
pub mod scatter;
pub mod scenario;

pub use map::{MapError, TextMap};
pub use render::render_route;
pub use scatter::scatter_walls;
pub use scenario::{Scenario, ScenarioError};
