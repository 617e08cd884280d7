//! Grids described as text.
//!
//! One character per cell, one line per row:
//!
//! | char | meaning |
//! |---|---|
//! | `.` | floor |
//! | `@` | wall |
//! | `S` | start (floor) |
//! | `E` | end (floor) |

use std::fmt;

use routefind_core::Point;
use routefind_paths::Grid;

pub const FLOOR: char = '.';
pub const WALL: char = '@';
pub const START: char = 'S';
pub const END: char = 'E';

/// A parsed text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMap {
    size: Point,
    walls: Vec<Point>,
    start: Option<Point>,
    end: Option<Point>,
}

impl TextMap {
    /// Parse a map. Leading and trailing whitespace of the whole string is
    /// trimmed, individual lines are taken as-is and must share a width.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        let mut map = Self {
            size: Point::ZERO,
            walls: Vec::new(),
            start: None,
            end: None,
        };
        if s.is_empty() {
            return Ok(map);
        }

        let mut width: Option<i32> = None;
        let mut y = 0;
        for line in s.lines() {
            let mut x = 0;
            for ch in line.chars() {
                let p = Point::new(x, y);
                match ch {
                    FLOOR => {}
                    WALL => map.walls.push(p),
                    START => Self::mark(&mut map.start, ch, p)?,
                    END => Self::mark(&mut map.end, ch, p)?,
                    _ => return Err(MapError::InvalidChar { ch, pos: p }),
                }
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(MapError::InconsistentWidth {
                        line: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            y += 1;
        }
        map.size = Point::new(width.unwrap_or(0), y);
        Ok(map)
    }

    fn mark(slot: &mut Option<Point>, ch: char, p: Point) -> Result<(), MapError> {
        if slot.is_some() {
            return Err(MapError::DuplicateMarker { ch, pos: p });
        }
        *slot = Some(p);
        Ok(())
    }

    /// (width, height) in cells.
    pub fn size(&self) -> Point {
        self.size
    }

    /// Wall positions in row-major order.
    pub fn walls(&self) -> &[Point] {
        &self.walls
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Build a search grid with this map's size and walls.
    pub fn to_grid(&self) -> Grid {
        Grid::new(self.size.x, self.size.y, &self.walls)
    }
}

/// Errors that can occur when parsing a text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A line's width differs from the first line's.
    InconsistentWidth { line: i32, expected: i32, found: i32 },
    /// A character outside the map alphabet.
    InvalidChar { ch: char, pos: Point },
    /// A second `S` or `E`.
    DuplicateMarker { ch: char, pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(f, "map line {line} is {found} wide, expected {expected}"),
            Self::InvalidChar { ch, pos } => {
                write!(f, "map contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "map has a second \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for MapError {}
