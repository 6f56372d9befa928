//! A read-only passability grid.
//!
//! [`Occupancy`] stores one boolean per cell in row-major order
//! (`true` = passable). It is plain owned data, so a single grid can be
//! shared by reference across any number of concurrent searches.

use std::fmt;

use crate::geom::{Point, Range};

/// Character for a passable cell in ASCII art.
pub const FLOOR: char = '.';
/// Character for a blocked cell in ASCII art.
pub const WALL: char = '#';
/// Passable cell marking the start point in ASCII art.
pub const START: char = 'S';
/// Passable cell marking the end point in ASCII art.
pub const END: char = 'E';

/// A width×height boolean passability grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawOccupancy"))]
pub struct Occupancy {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

/// Unchecked wire form of [`Occupancy`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawOccupancy {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawOccupancy> for Occupancy {
    type Error = OccupancyError;

    fn try_from(raw: RawOccupancy) -> Result<Self, Self::Error> {
        check_size(raw.width, raw.height)?;
        let expected = (raw.width as usize) * (raw.height as usize);
        if raw.cells.len() != expected {
            return Err(OccupancyError::BufferSize {
                expected,
                actual: raw.cells.len(),
            });
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            cells: raw.cells,
        })
    }
}

/// Result of [`Occupancy::parse_map`]: the grid plus any endpoint markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiMap {
    pub grid: Occupancy,
    pub start: Option<Point>,
    pub end: Option<Point>,
}

impl Occupancy {
    /// Create a grid where every cell has the given passability.
    pub fn filled(width: i32, height: i32, passable: bool) -> Result<Self, OccupancyError> {
        check_size(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![passable; (width as usize) * (height as usize)],
        })
    }

    /// Build a grid from a row-major byte buffer where nonzero means passable.
    pub fn from_bytes(width: i32, height: i32, bytes: &[u8]) -> Result<Self, OccupancyError> {
        check_size(width, height)?;
        let expected = (width as usize) * (height as usize);
        if bytes.len() != expected {
            return Err(OccupancyError::BufferSize {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells: bytes.iter().map(|&b| b != 0).collect(),
        })
    }

    /// Build a grid by evaluating `f` at every point in row-major order.
    pub fn from_fn(
        width: i32,
        height: i32,
        mut f: impl FnMut(Point) -> bool,
    ) -> Result<Self, OccupancyError> {
        check_size(width, height)?;
        let cells = Range::new(0, 0, width, height).iter().map(&mut f).collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse ASCII art made of [`FLOOR`] and [`WALL`] characters.
    ///
    /// Endpoint markers ([`START`], [`END`]) are accepted and read as
    /// passable; use [`parse_map`](Self::parse_map) to recover their
    /// positions.
    pub fn parse(s: &str) -> Result<Self, OccupancyError> {
        Ok(Self::parse_map(s)?.grid)
    }

    /// Parse ASCII art, also returning the positions of the `S` and `E`
    /// markers if present.
    ///
    /// Leading/trailing whitespace of the whole string is trimmed, but not
    /// of individual lines. Every line must have the same width.
    pub fn parse_map(s: &str) -> Result<AsciiMap, OccupancyError> {
        let s = s.trim();
        let mut cells = Vec::with_capacity(s.len());
        let mut start = None;
        let mut end = None;
        let mut width: i32 = -1;
        let mut height: i32 = 0;

        for (y, line) in s.lines().enumerate() {
            let mut x: i32 = 0;
            for ch in line.chars() {
                let pos = Point::new(x, y as i32);
                let passable = match ch {
                    FLOOR => true,
                    WALL => false,
                    START | END => {
                        let slot = if ch == START { &mut start } else { &mut end };
                        if slot.is_some() {
                            return Err(OccupancyError::DuplicateMarker { ch, pos });
                        }
                        *slot = Some(pos);
                        true
                    }
                    _ => {
                        return Err(OccupancyError::InvalidRune {
                            ch,
                            pos,
                            content: s.to_string(),
                        });
                    }
                };
                cells.push(passable);
                x += 1;
            }
            if width >= 0 && x != width {
                return Err(OccupancyError::InconsistentSize(s.to_string()));
            }
            width = x;
            height += 1;
        }

        Ok(AsciiMap {
            grid: Self {
                width: width.max(0),
                height,
                cells,
            },
            start,
            end,
        })
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The grid rectangle, anchored at the origin.
    #[inline]
    pub fn range(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width.max(1) as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Whether `p` is passable. Out-of-bounds points are never passable.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.cells[i])
    }

    /// Set the passability of `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, passable: bool) {
        if let Some(i) = self.index(p) {
            self.cells[i] = passable;
        }
    }

    /// Row-major passability values.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of passable cells.
    pub fn count_passable(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width.max(1) as usize).enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for &c in row {
                write!(f, "{}", if c { FLOOR } else { WALL })?;
            }
        }
        Ok(())
    }
}

fn check_size(width: i32, height: i32) -> Result<(), OccupancyError> {
    if width < 0 || height < 0 {
        return Err(OccupancyError::NegativeSize { width, height });
    }
    Ok(())
}

/// Errors that can occur when building an [`Occupancy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OccupancyError {
    /// Width or height is negative.
    NegativeSize { width: i32, height: i32 },
    /// The byte buffer does not hold exactly width×height values.
    BufferSize { expected: usize, actual: usize },
    /// ASCII art lines have inconsistent widths.
    InconsistentSize(String),
    /// ASCII art contains a character that is not a floor, wall or marker.
    InvalidRune {
        ch: char,
        pos: Point,
        content: String,
    },
    /// An endpoint marker appears more than once.
    DuplicateMarker { ch: char, pos: Point },
}

impl fmt::Display for OccupancyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeSize { width, height } => {
                write!(f, "occupancy: negative size {width}x{height}")
            }
            Self::BufferSize { expected, actual } => {
                write!(f, "occupancy: expected {expected} bytes, got {actual}")
            }
            Self::InconsistentSize(s) => write!(f, "occupancy: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos, content } => write!(
                f,
                "occupancy contains invalid rune \u{201c}{ch}\u{201d} at {pos}:\n{content}"
            ),
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "occupancy: duplicate marker \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for OccupancyError {}
