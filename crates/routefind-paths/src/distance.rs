use routefind_core::Point;

/// Path and heuristic cost. Wide enough for squared distances across any
/// `i32` grid.
pub type Cost = i64;

/// Cost of a step to a horizontally or vertically adjacent cell.
pub const ORTHOGONAL_COST: Cost = 10;

/// Cost of a diagonal step, 10·√2 rounded down.
pub const DIAGONAL_COST: Cost = 14;

/// Cost of moving from `from` to the adjacent cell `to`.
#[inline]
pub fn step_cost(from: Point, to: Point) -> Cost {
    if from.is_aligned(to) {
        ORTHOGONAL_COST
    } else {
        DIAGONAL_COST
    }
}

/// Squared straight-line distance between two points.
#[inline]
pub fn squared_euclidean(a: Point, b: Point) -> Cost {
    let dx = Cost::from(a.x) - Cost::from(b.x);
    let dy = Cost::from(a.y) - Cost::from(b.y);
    dx * dx + dy * dy
}

/// Octile distance in step-cost units: the cheapest 8-connected walk on an
/// empty grid.
#[inline]
pub fn octile(a: Point, b: Point) -> Cost {
    let dx = (Cost::from(a.x) - Cost::from(b.x)).abs();
    let dy = (Cost::from(a.y) - Cost::from(b.y)).abs();
    let diag = dx.min(dy);
    DIAGONAL_COST * diag + ORTHOGONAL_COST * (dx.max(dy) - diag)
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
