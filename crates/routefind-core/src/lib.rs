//! **routefind-core** — geometry primitives shared by the routefind crates.
//!
//! Provides [`Point`], an integer grid coordinate, and [`Range`], a
//! half-open rectangle of coordinates with row-major iteration.

pub mod geom;

pub use geom::{Point, Range};
