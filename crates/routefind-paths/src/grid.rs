use std::collections::{BinaryHeap, HashMap, HashSet};

use routefind_core::{Point, Range};

use crate::config::SearchConfig;
use crate::distance::Cost;
use crate::error::RouteError;
use crate::neighbors::Neighbors;
use crate::node::Node;

/// Entry in the open-set priority queue.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the lowest `f` first,
/// then the lowest `g`, then the lowest flattened index.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: Cost,
    pub(crate) g: Cost,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A fixed-size search space with optional walls.
///
/// Nodes live in a sparse map keyed by flattened index (`y * width + x`).
/// Walls are allocated up front; every other node is allocated the first
/// time a search reaches it. The grid is the only owner of its nodes, which
/// refer to their parents by index.
#[derive(Debug, Clone)]
pub struct Grid {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) cells: HashMap<usize, Node>,
    pub(crate) open_set: HashSet<usize>,
    pub(crate) closed_set: HashSet<usize>,
    pub(crate) frontier: BinaryHeap<NodeRef>,
    pub(crate) start: Option<Point>,
    pub(crate) end: Option<Point>,
    pub(crate) iterations: usize,
    pub(crate) config: SearchConfig,
    // scratch buffer for neighbour queries
    pub(crate) nbuf: Neighbors,
}

impl Grid {
    /// Create a `width` × `height` grid with the default [`SearchConfig`].
    ///
    /// Walls outside the grid are ignored.
    pub fn new(width: i32, height: i32, walls: &[Point]) -> Self {
        Self::with_config(width, height, walls, SearchConfig::default())
    }

    /// Create a grid that searches with `config`.
    pub fn with_config(width: i32, height: i32, walls: &[Point], config: SearchConfig) -> Self {
        let rng = Range::with_size(width, height);
        let mut grid = Self {
            rng,
            width: rng.width() as usize,
            cells: HashMap::new(),
            open_set: HashSet::new(),
            closed_set: HashSet::new(),
            frontier: BinaryHeap::new(),
            start: None,
            end: None,
            iterations: 0,
            config,
            nbuf: Neighbors::new(),
        };
        for &p in walls {
            match grid.idx(p) {
                Some(i) => {
                    grid.cells.insert(i, Node::wall(p));
                }
                None => log::warn!("ignoring wall {p} outside grid {rng}"),
            }
        }
        grid
    }

    /// Grid size (x = width, y = height).
    #[inline]
    pub fn dimensions(&self) -> Point {
        self.rng.size()
    }

    /// The rectangle covered by the grid.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.rng.contains(p)
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Replace the search configuration used by later searches.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Whether `p` is an obstacle. Points outside the grid are not walls.
    pub fn is_wall(&self, p: Point) -> bool {
        self.idx(p)
            .and_then(|i| self.cells.get(&i))
            .is_some_and(|n| !n.is_traversable())
    }

    /// All wall positions in row-major order.
    pub fn walls(&self) -> Vec<Point> {
        let mut walls: Vec<Point> = self
            .cells
            .values()
            .filter(|n| !n.is_traversable())
            .map(Node::position)
            .collect();
        walls.sort();
        walls
    }

    /// The node at `p`, if one has been allocated.
    pub fn node(&self, p: Point) -> Option<&Node> {
        self.idx(p).and_then(|i| self.cells.get(&i))
    }

    /// Accumulated cost `g` at `p` after the last search.
    pub fn cost_at(&self, p: Point) -> Option<Cost> {
        self.node(p).and_then(Node::g)
    }

    /// Number of nodes expanded by the last search.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Number of allocated nodes, walls included.
    #[inline]
    pub fn allocated(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn open_len(&self) -> usize {
        self.open_set.len()
    }

    #[inline]
    pub fn closed_len(&self) -> usize {
        self.closed_set.len()
    }

    /// Whether `p` was finalized by the last search.
    pub fn is_closed(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.closed_set.contains(&i))
    }

    /// Endpoints of the last search, if it got past validation.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        Some((self.start?, self.end?))
    }

    /// Drop all search state, keeping only the walls.
    pub(crate) fn reset(&mut self) {
        self.cells.retain(|_, n| !n.is_traversable());
        self.open_set.clear();
        self.closed_set.clear();
        self.frontier.clear();
        self.start = None;
        self.end = None;
        self.iterations = 0;
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Like [`idx`](Self::idx), failing with [`RouteError::OutOfBounds`].
    #[inline]
    pub(crate) fn checked_idx(&self, p: Point) -> Result<usize, RouteError> {
        self.idx(p).ok_or(RouteError::OutOfBounds {
            pos: p,
            dimensions: self.dimensions(),
        })
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}
