//! Random obstacle maps.

use rand::Rng;
use routefind_core::{Point, Range};

/// Pick wall positions on a `width` × `height` grid: each cell becomes a
/// wall with probability `density`, except the cells in `keep_clear`.
pub fn scatter_walls(
    width: i32,
    height: i32,
    density: f64,
    keep_clear: &[Point],
    rng: &mut impl Rng,
) -> Vec<Point> {
    Range::with_size(width, height)
        .iter()
        .filter(|p| !keep_clear.contains(p))
        .filter(|_| rng.random::<f64>() < density)
        .collect()
}
