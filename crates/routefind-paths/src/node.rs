use routefind_core::Point;

use crate::config::Heuristic;
use crate::distance::{Cost, step_cost};

/// Search costs of a discovered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Costs {
    pub(crate) g: Cost,
    pub(crate) h: Cost,
    pub(crate) f: Cost,
}

/// Snapshot of a discovered node offered as a parent to one of its
/// neighbours.
///
/// `idx` is the flattened index of the parent in the owning
/// [`Grid`](crate::Grid); nodes refer to each other only through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parent {
    /// Flattened index of the parent cell.
    pub idx: usize,
    /// Position of the parent cell.
    pub pos: Point,
    /// Accumulated cost from the start to the parent.
    pub g: Cost,
}

impl Parent {
    /// Snapshot `node`, stored at `idx`. Returns `None` for a node the
    /// search has not discovered yet.
    pub fn of(idx: usize, node: &Node) -> Option<Self> {
        Some(Self {
            idx,
            pos: node.position,
            g: node.g()?,
        })
    }
}

/// Search bookkeeping for a single grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    position: Point,
    traversable: bool,
    parent: Option<usize>,
    costs: Option<Costs>,
}

impl Node {
    /// An undiscovered node: no parent, no costs.
    pub fn new(position: Point, traversable: bool) -> Self {
        Self {
            position,
            traversable,
            parent: None,
            costs: None,
        }
    }

    /// An obstacle.
    pub fn wall(position: Point) -> Self {
        Self::new(position, false)
    }

    /// The start node. Its heuristic is zero rather than an estimate: it is
    /// the reference point of the search and is expanded first regardless.
    pub fn start(position: Point) -> Self {
        Self {
            costs: Some(Costs { g: 0, h: 0, f: 0 }),
            ..Self::new(position, true)
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn is_traversable(&self) -> bool {
        self.traversable
    }

    /// Index of the cell this node was most cheaply reached from.
    #[inline]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Accumulated cost from the start, once discovered.
    #[inline]
    pub fn g(&self) -> Option<Cost> {
        self.costs.map(|c| c.g)
    }

    /// Heuristic estimate to the end, once discovered.
    #[inline]
    pub fn h(&self) -> Option<Cost> {
        self.costs.map(|c| c.h)
    }

    /// Priority `g + h`, once discovered.
    #[inline]
    pub fn f(&self) -> Option<Cost> {
        self.costs.map(|c| c.f)
    }

    /// Discover this node through `parent`: link it and compute all three
    /// costs from scratch.
    pub fn calculate_cost(&mut self, parent: Parent, end: Point, heuristic: Heuristic) {
        let g = self.g_value_via(&parent);
        let h = heuristic.estimate(self.position, end);
        self.parent = Some(parent.idx);
        self.costs = Some(Costs { g, h, f: g + h });
    }

    /// What `g` would be if this node were reached through `parent`.
    #[inline]
    pub fn g_value_via(&self, parent: &Parent) -> Cost {
        parent.g + step_cost(parent.pos, self.position)
    }

    /// Re-parent onto `candidate` if that makes the path to this node
    /// strictly cheaper. The cached heuristic is kept. Returns whether the
    /// parent changed.
    pub fn consider_new_parent(&mut self, candidate: Parent) -> bool {
        let g = self.g_value_via(&candidate);
        let Some(costs) = self.costs.as_mut() else {
            return false;
        };
        if g >= costs.g {
            return false;
        }
        costs.g = g;
        costs.f = g + costs.h;
        self.parent = Some(candidate.idx);
        true
    }
}
