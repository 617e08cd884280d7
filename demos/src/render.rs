use std::collections::HashSet;

use routefind_core::Point;
use routefind_paths::Grid;

use crate::map::{END, FLOOR, START, WALL};

/// Marker for a route cell between the endpoints.
pub const ROUTE: char = 'x';

/// Draw `grid` as text, one line per row, marking `start`, `end`, walls and
/// the cells of `route`.
pub fn render_route(grid: &Grid, start: Point, end: Point, route: &[Point]) -> String {
    let on_route: HashSet<Point> = route.iter().copied().collect();
    let rng = grid.range();
    let mut out = String::with_capacity(rng.len() + rng.height().max(0) as usize);

    for y in 0..rng.height() {
        if y > 0 {
            out.push('\n');
        }
        for p in rng.line(y) {
            let ch = if p == start {
                START
            } else if p == end {
                END
            } else if grid.is_wall(p) {
                WALL
            } else if on_route.contains(&p) {
                ROUTE
            } else {
                FLOOR
            };
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TextMap;

    #[test]
    fn renders_route_around_wall() {
        let map = TextMap::parse("S.@.E\n..@..\n.....").unwrap();
        let mut grid = map.to_grid();
        let (start, end) = (Point::new(0, 0), Point::new(4, 0));
        let route = grid.find_route(start, end).unwrap();
        assert_eq!(
            render_route(&grid, start, end, &route),
            "S.@.E\n.x@x.\n..x.."
        );
    }

    #[test]
    fn renders_without_route() {
        let grid = Grid::new(3, 2, &[Point::new(1, 0), Point::new(1, 1)]);
        let out = render_route(&grid, Point::new(0, 0), Point::new(2, 1), &[]);
        assert_eq!(out, "S@.\n.@E");
    }

    #[test]
    fn render_parses_back() {
        let map = TextMap::parse("S...\n.@@.\n...E").unwrap();
        let mut grid = map.to_grid();
        let (start, end) = (Point::new(0, 0), Point::new(3, 2));
        let route = grid.find_route(start, end).unwrap();
        let text = render_route(&grid, start, end, &[]);
        let back = TextMap::parse(&text).unwrap();
        assert_eq!(back, map);
        assert!(route.len() >= 4);
    }
}
