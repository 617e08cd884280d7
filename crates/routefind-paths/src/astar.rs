use routefind_core::Point;

use crate::Grid;
use crate::error::RouteError;
use crate::grid::NodeRef;
use crate::node::{Node, Parent};

impl Grid {
    /// Find a route from `start` to `end` using the grid's configured
    /// iteration budget.
    ///
    /// Returns every cell of the route, both endpoints included, in order
    /// from `start` to `end`.
    pub fn find_route(&mut self, start: Point, end: Point) -> Result<Vec<Point>, RouteError> {
        self.find_route_within(start, end, self.config.max_iterations)
    }

    /// Find a route from `start` to `end`, expanding at most
    /// `max_iterations` nodes.
    ///
    /// Each call starts from a clean search state; only the walls carry
    /// over. A route from a point to itself is `[start]` and costs no
    /// iterations.
    pub fn find_route_within(
        &mut self,
        start: Point,
        end: Point,
        max_iterations: usize,
    ) -> Result<Vec<Point>, RouteError> {
        let start_idx = self.checked_idx(start)?;
        let end_idx = self.checked_idx(end)?;

        self.reset();

        if self.is_wall(start) || self.is_wall(end) {
            log::debug!("route {start} -> {end}: endpoint is a wall");
            return Err(RouteError::NoRouteExists { start, end });
        }

        self.start = Some(start);
        self.end = Some(end);
        self.cells.insert(start_idx, Node::start(start));

        if start_idx == end_idx {
            self.closed_set.insert(start_idx);
            return Ok(vec![start]);
        }

        self.open_set.insert(start_idx);
        self.frontier.push(NodeRef {
            idx: start_idx,
            f: 0,
            g: 0,
        });

        log::debug!(
            "route {start} -> {end}: searching {} with budget {max_iterations}",
            self.rng
        );

        while self.iterations < max_iterations {
            let Some(ci) = self.pop_open() else {
                return Err(RouteError::NoRouteExists { start, end });
            };
            self.open_set.remove(&ci);
            self.closed_set.insert(ci);
            self.iterations += 1;

            if ci == end_idx {
                let path = self.trace_back(end_idx);
                log::debug!(
                    "route {start} -> {end}: {} steps, cost {:?}, {} iterations",
                    path.len() - 1,
                    self.cost_at(end),
                    self.iterations
                );
                return Ok(path);
            }

            self.expand(ci, end);

            if self.open_set.is_empty() {
                log::debug!(
                    "route {start} -> {end}: no route after {} iterations",
                    self.iterations
                );
                return Err(RouteError::NoRouteExists { start, end });
            }
        }

        log::debug!("route {start} -> {end}: iteration limit {max_iterations} reached");
        Err(RouteError::IterationLimitExceeded {
            limit: max_iterations,
        })
    }

    /// Pop the best open node, skipping queue entries made stale by a
    /// cheaper re-parenting.
    fn pop_open(&mut self) -> Option<usize> {
        while let Some(entry) = self.frontier.pop() {
            if !self.open_set.contains(&entry.idx) {
                continue;
            }
            let current = self.cells.get(&entry.idx).and_then(Node::f);
            if current == Some(entry.f) {
                return Some(entry.idx);
            }
        }
        None
    }

    /// Discover or improve every traversable, non-closed neighbour of the
    /// node at `ci`.
    fn expand(&mut self, ci: usize, end: Point) {
        let Some(via) = self.cells.get(&ci).and_then(|n| Parent::of(ci, n)) else {
            return;
        };
        let heuristic = self.config.heuristic;
        let rng = self.rng;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        for &np in nbuf.all(via.pos, |p| rng.contains(p)) {
            let Some(ni) = self.idx(np) else {
                continue;
            };
            if self.closed_set.contains(&ni) {
                continue;
            }

            // Lazily allocate nodes the first time the search touches them.
            let node = self
                .cells
                .entry(ni)
                .or_insert_with(|| Node::new(np, true));
            if !node.is_traversable() {
                continue;
            }

            if self.open_set.insert(ni) {
                node.calculate_cost(via, end, heuristic);
            } else if !node.consider_new_parent(via) {
                continue;
            }

            let (Some(f), Some(g)) = (node.f(), node.g()) else {
                continue;
            };
            log::trace!("{} via {}: g={g} f={f}", np, via.pos);
            self.frontier.push(NodeRef { idx: ni, f, g });
        }

        self.nbuf = nbuf;
    }

    /// Follow parent links from `end_idx` back to the start.
    fn trace_back(&self, end_idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = Some(end_idx);
        while let Some(ci) = cur {
            path.push(self.point(ci));
            cur = self.cells.get(&ci).and_then(Node::parent);
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use crate::{Cost, Grid, Heuristic, RouteError, SearchConfig, chebyshev, step_cost};
    use routefind_core::Point;

    fn column_wall(x: i32, ys: std::ops::Range<i32>) -> Vec<Point> {
        ys.map(|y| Point::new(x, y)).collect()
    }

    fn assert_valid_route(grid: &Grid, path: &[Point], start: Point, end: Point) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        for w in path.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} and {} not adjacent", w[0], w[1]);
        }
        for p in path {
            assert!(grid.contains(*p));
            assert!(!grid.is_wall(*p), "route crosses wall at {p}");
        }
    }

    fn route_cost(path: &[Point]) -> Cost {
        path.windows(2).map(|w| step_cost(w[0], w[1])).sum()
    }

    #[test]
    fn open_grid_route() {
        let mut g = Grid::new(10, 10, &[]);
        let start = Point::new(0, 0);
        let end = Point::new(7, 2);
        let path = g.find_route(start, end).unwrap();
        assert_valid_route(&g, &path, start, end);
        assert_eq!(path.len(), 8);
        assert_eq!(route_cost(&path), 78);
        assert_eq!(g.cost_at(end), Some(78));
        assert_eq!(g.iterations(), 34);
    }

    #[test]
    fn open_grid_steps_equal_chebyshev_distance() {
        for heuristic in [Heuristic::SquaredEuclidean, Heuristic::Octile] {
            let cfg = SearchConfig {
                heuristic,
                ..SearchConfig::default()
            };
            let mut g = Grid::with_config(10, 10, &[], cfg);
            for start in g.range() {
                for end in g.range() {
                    let path = g.find_route(start, end).unwrap();
                    assert_eq!(path.len() as i32 - 1, chebyshev(start, end));
                    assert_valid_route(&g, &path, start, end);
                }
            }
        }
    }

    #[test]
    fn same_start_and_end() {
        let mut g = Grid::new(10, 10, &[]);
        for p in [Point::new(0, 0), Point::new(4, 7), Point::new(9, 9)] {
            assert_eq!(g.find_route(p, p), Ok(vec![p]));
            assert_eq!(g.iterations(), 0);
            assert_eq!(g.cost_at(p), Some(0));
        }
        let p = Point::new(1, 1);
        assert_eq!(g.find_route_within(p, p, 0), Ok(vec![p]));
    }

    #[test]
    fn full_wall_has_no_route() {
        let mut g = Grid::new(10, 10, &column_wall(5, 0..10));
        let err = g.find_route(Point::new(1, 0), Point::new(9, 2)).unwrap_err();
        assert_eq!(
            err,
            RouteError::NoRouteExists {
                start: Point::new(1, 0),
                end: Point::new(9, 2),
            }
        );
        // Every cell left of the wall was expanded.
        assert_eq!(g.iterations(), 50);
        assert_eq!(g.closed_len(), 50);
    }

    #[test]
    fn horizontal_wall_has_no_route() {
        let walls: Vec<Point> = (0..10).map(|x| Point::new(x, 4)).collect();
        let mut g = Grid::new(10, 10, &walls);
        assert!(matches!(
            g.find_route(Point::new(2, 1), Point::new(2, 8)),
            Err(RouteError::NoRouteExists { .. })
        ));
    }

    #[test]
    fn wall_with_gap_routes_through_gap() {
        let mut g = Grid::new(10, 10, &column_wall(5, 1..10));
        let start = Point::new(1, 0);
        let end = Point::new(9, 2);
        let path = g.find_route(start, end).unwrap();
        assert_valid_route(&g, &path, start, end);
        assert!(path.contains(&Point::new(5, 0)));
        assert_eq!(
            path,
            vec![
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0),
                Point::new(4, 0),
                Point::new(5, 0),
                Point::new(6, 0),
                Point::new(7, 0),
                Point::new(8, 1),
                Point::new(9, 2),
            ]
        );
        assert_eq!(g.iterations(), 33);
    }

    #[test]
    fn octile_search_expands_fewer_nodes_through_gap() {
        let cfg = SearchConfig {
            heuristic: Heuristic::Octile,
            ..SearchConfig::default()
        };
        let mut g = Grid::with_config(10, 10, &column_wall(5, 1..10), cfg);
        let path = g.find_route(Point::new(1, 0), Point::new(9, 2)).unwrap();
        assert_eq!(route_cost(&path), 88);
        assert_eq!(g.iterations(), 18);
    }

    #[test]
    fn iteration_limit_is_distinct_from_no_route() {
        let mut g = Grid::new(10, 10, &column_wall(5, 1..10));
        let start = Point::new(1, 0);
        let end = Point::new(9, 2);
        assert_eq!(
            g.find_route_within(start, end, 32),
            Err(RouteError::IterationLimitExceeded { limit: 32 })
        );
        assert_eq!(g.iterations(), 32);
        assert!(g.find_route_within(start, end, 33).is_ok());

        let mut g = Grid::new(10, 10, &column_wall(5, 0..10));
        assert_eq!(
            g.find_route_within(start, end, 49),
            Err(RouteError::IterationLimitExceeded { limit: 49 })
        );
        assert!(matches!(
            g.find_route_within(start, end, 50),
            Err(RouteError::NoRouteExists { .. })
        ));
    }

    #[test]
    fn configured_budget_applies_to_find_route() {
        let cfg = SearchConfig {
            max_iterations: 3,
            ..SearchConfig::default()
        };
        let mut g = Grid::with_config(10, 10, &[], cfg);
        assert_eq!(
            g.find_route(Point::new(0, 0), Point::new(9, 9)),
            Err(RouteError::IterationLimitExceeded { limit: 3 })
        );
    }

    #[test]
    fn out_of_bounds_fails_before_touching_state() {
        let mut g = Grid::new(10, 10, &[]);
        g.find_route(Point::new(0, 0), Point::new(3, 3)).unwrap();
        let allocated = g.allocated();
        let iterations = g.iterations();

        for (start, end, bad) in [
            (Point::new(-1, 0), Point::new(3, 3), Point::new(-1, 0)),
            (Point::new(0, 0), Point::new(3, 10), Point::new(3, 10)),
            (Point::new(10, 0), Point::new(30, 30), Point::new(10, 0)),
        ] {
            assert_eq!(
                g.find_route(start, end),
                Err(RouteError::OutOfBounds {
                    pos: bad,
                    dimensions: Point::new(10, 10),
                })
            );
            assert_eq!(g.allocated(), allocated);
            assert_eq!(g.iterations(), iterations);
        }
    }

    #[test]
    fn wall_endpoints_have_no_route() {
        let wall = Point::new(4, 4);
        let mut g = Grid::new(10, 10, &[wall]);
        assert!(matches!(
            g.find_route(wall, Point::new(0, 0)),
            Err(RouteError::NoRouteExists { .. })
        ));
        assert!(matches!(
            g.find_route(Point::new(0, 0), wall),
            Err(RouteError::NoRouteExists { .. })
        ));
        assert_eq!(g.iterations(), 0);
        assert!(g.is_wall(wall));
    }

    #[test]
    fn nodes_are_allocated_lazily() {
        let mut g = Grid::new(1000, 1000, &[]);
        let path = g.find_route(Point::new(10, 10), Point::new(20, 10)).unwrap();
        assert_eq!(path.len(), 11);
        assert!(g.allocated() < 1000);
        assert!(g.node(Point::new(900, 900)).is_none());
    }

    #[test]
    fn open_and_closed_sets_stay_disjoint() {
        let mut g = Grid::new(10, 10, &column_wall(5, 1..10));
        g.find_route(Point::new(1, 0), Point::new(9, 2)).unwrap();
        assert!(g.open_set.is_disjoint(&g.closed_set));
        for i in g.open_set.iter().chain(g.closed_set.iter()) {
            assert!(g.cells.contains_key(i));
        }
        assert_eq!(g.closed_len(), g.iterations());
    }

    #[test]
    fn parents_are_adjacent_traversable_cells() {
        let walls = column_wall(5, 1..10);
        let mut g = Grid::new(10, 10, &walls);
        g.find_route(Point::new(1, 0), Point::new(9, 2)).unwrap();
        for node in g.cells.values() {
            if let Some(pi) = node.parent() {
                let parent = &g.cells[&pi];
                assert!(parent.is_traversable());
                assert!(parent.position().is_adjacent(node.position()));
            }
        }
    }

    #[test]
    fn wide_grid_costs_stay_ordered() {
        let mut g = Grid::new(50_000, 1, &[]);
        let start = Point::new(0, 0);
        let end = Point::new(49_999, 0);
        assert_eq!(
            g.find_route_within(start, end, 100),
            Err(RouteError::IterationLimitExceeded { limit: 100 })
        );
        // The search walks straight towards the end: every expanded cell is
        // the next one along the row.
        assert_eq!(g.closed_len(), 100);
        assert!(g.is_closed(Point::new(99, 0)));
        assert!(!g.is_closed(Point::new(100, 0)));
        let h = g.node(Point::new(100, 0)).and_then(|n| n.h());
        assert_eq!(h, Some(49_899 * 49_899));

        let path = g.find_route_within(start, end, 50_000).unwrap();
        assert_eq!(path.len(), 50_000);
        assert_eq!(g.iterations(), 50_000);
        assert_eq!(g.cost_at(end), Some(499_990));
    }

    #[test]
    fn grid_is_reusable_after_failure() {
        let mut g = Grid::new(10, 10, &column_wall(5, 1..10));
        let start = Point::new(1, 0);
        let end = Point::new(9, 2);
        assert!(g.find_route_within(start, end, 5).is_err());
        let first = g.find_route(start, end).unwrap();
        let second = g.find_route(start, end).unwrap();
        assert_eq!(first, second);
        assert_eq!(g.walls().len(), 9);
        assert_eq!(g.endpoints(), Some((start, end)));
    }

    #[test]
    fn route_hugs_obstacle_corner() {
        // A pocket that forces a detour around its open end.
        let walls = vec![
            Point::new(3, 1),
            Point::new(3, 2),
            Point::new(3, 3),
            Point::new(2, 3),
            Point::new(1, 3),
        ];
        let mut g = Grid::new(6, 6, &walls);
        let start = Point::new(1, 1);
        let end = Point::new(5, 5);
        let path = g.find_route(start, end).unwrap();
        assert_valid_route(&g, &path, start, end);
    }
}
