//! Route-finding scenarios loaded from JSON or built in.

use std::fmt;
use std::path::Path;

use routefind_core::Point;
use routefind_paths::{Grid, RouteError, SearchConfig};
use serde::{Deserialize, Serialize};

use crate::map::{MapError, TextMap};
use crate::render::render_route;

/// One search to run: a grid, its walls, the endpoints and how to search.
///
/// ```json
/// {
///   "name": "gap",
///   "width": 10, "height": 10,
///   "walls": [{"x": 5, "y": 1}, {"x": 5, "y": 2}],
///   "start": {"x": 1, "y": 0},
///   "end": {"x": 9, "y": 2},
///   "search": {"max_iterations": 500, "heuristic": "octile"}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub walls: Vec<Point>,
    pub start: Point,
    pub end: Point,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Scenario {
    /// Read a scenario from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Build a scenario from a text map that marks both `S` and `E`.
    pub fn from_map(name: &str, map: &str) -> Result<Self, ScenarioError> {
        let map = TextMap::parse(map)?;
        let (Some(start), Some(end)) = (map.start(), map.end()) else {
            return Err(ScenarioError::MissingEndpoint);
        };
        Ok(Self {
            name: name.to_string(),
            width: map.size().x,
            height: map.size().y,
            walls: map.walls().to_vec(),
            start,
            end,
            search: SearchConfig::default(),
        })
    }

    /// The search grid described by this scenario.
    pub fn grid(&self) -> Grid {
        Grid::with_config(self.width, self.height, &self.walls, self.search)
    }

    /// Run the search and describe the outcome as text: the rendered map
    /// followed by a summary line.
    pub fn run(&self) -> (Result<Vec<Point>, RouteError>, String) {
        log::info!("running scenario {:?}", self.name);
        let mut grid = self.grid();
        let result = grid.find_route(self.start, self.end);
        let route = result.as_deref().unwrap_or(&[]);
        let mut report = String::new();
        if !self.name.is_empty() {
            report.push_str(&format!("== {}\n", self.name));
        }
        if grid.contains(self.start) && grid.contains(self.end) {
            report.push_str(&render_route(&grid, self.start, self.end, route));
            report.push('\n');
        }
        match &result {
            Ok(route) => report.push_str(&format!(
                "route of {} steps, cost {}, {} iterations",
                route.len() - 1,
                grid.cost_at(self.end).unwrap_or(0),
                grid.iterations()
            )),
            Err(e) => report.push_str(&format!("failed: {e}")),
        }
        (result, report)
    }
}

/// The scenarios run when no file is given.
pub fn builtin() -> Vec<Scenario> {
    let column = |ys: std::ops::Range<i32>| -> Vec<Point> { ys.map(|y| Point::new(5, y)).collect() };
    vec![
        Scenario {
            name: "open".to_string(),
            width: 10,
            height: 10,
            walls: Vec::new(),
            start: Point::new(0, 0),
            end: Point::new(7, 2),
            search: SearchConfig::default(),
        },
        Scenario {
            name: "sealed".to_string(),
            width: 10,
            height: 10,
            walls: column(0..10),
            start: Point::new(1, 0),
            end: Point::new(9, 2),
            search: SearchConfig::default(),
        },
        Scenario {
            name: "gap".to_string(),
            width: 10,
            height: 10,
            walls: column(1..10),
            start: Point::new(1, 0),
            end: Point::new(9, 2),
            search: SearchConfig::default(),
        },
    ]
}

/// Errors raised while preparing a scenario.
#[derive(Debug)]
pub enum ScenarioError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Map(MapError),
    /// The text map lacks an `S` or an `E`.
    MissingEndpoint,
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read scenario: {e}"),
            Self::Json(e) => write!(f, "invalid scenario: {e}"),
            Self::Map(e) => write!(f, "invalid scenario map: {e}"),
            Self::MissingEndpoint => write!(f, "scenario map needs both S and E"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Map(e) => Some(e),
            Self::MissingEndpoint => None,
        }
    }
}

impl From<std::io::Error> for ScenarioError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ScenarioError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<MapError> for ScenarioError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}
