//! A dense open/blocked tile map.
//!
//! [`TileMap`] stores one `bool` per cell in row-major order, `true` meaning
//! the cell can be walked on. Maps can be built programmatically or parsed
//! from ASCII art with [`TileMap::parse`].

use std::fmt;

use crate::geom::{Point, Range};

/// Character for an open cell in the ASCII form.
pub const OPEN: char = '.';
/// Character for a blocked cell in the ASCII form.
pub const BLOCKED: char = '#';

/// A rectangular field of open or blocked cells anchored at (0, 0).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTileMap")
)]
pub struct TileMap {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl TileMap {
    /// Create a map of the given size with every cell open.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![true; (width as usize) * (height as usize)],
        }
    }

    /// Parse a map from ASCII art, one row per line.
    ///
    /// `.` is open and `#` is blocked. Leading and trailing blank lines are
    /// ignored; every remaining line must have the same width.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .skip_while(|l| l.is_empty())
            .collect();
        let end = lines.iter().rposition(|l| !l.is_empty()).map_or(0, |i| i + 1);
        let lines = &lines[..end];
        let Some(first) = lines.first() else {
            return Err(ParseError::Empty);
        };

        let width = first.chars().count();
        let mut cells = Vec::with_capacity(width * lines.len());
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                match ch {
                    OPEN => cells.push(true),
                    BLOCKED => cells.push(false),
                    _ => {
                        return Err(ParseError::InvalidChar {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                }
            }
        }

        Ok(Self {
            width: width as i32,
            height: lines.len() as i32,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether the map contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Openness of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<bool> {
        self.bounds().index_of(p).map(|i| self.cells[i])
    }

    /// Whether `p` is inside the map and open.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).unwrap_or(false)
    }

    /// Set the cell at `p` open or blocked. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, open: bool) {
        if let Some(i) = self.bounds().index_of(p) {
            self.cells[i] = open;
        }
    }

    pub fn set_open(&mut self, p: Point) {
        self.set(p, true);
    }

    pub fn set_blocked(&mut self, p: Point) {
        self.set(p, false);
    }

    /// Set every cell to the same state.
    pub fn fill(&mut self, open: bool) {
        self.cells.fill(open);
    }

    /// Number of open cells.
    pub fn count_open(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterate over `(Point, open)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, bool)> + '_ {
        let bounds = self.bounds();
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &open)| (bounds.point_at(i), open))
    }
}

/// Unchecked wire form of a [`TileMap`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTileMap {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTileMap> for TileMap {
    type Error = ParseError;

    fn try_from(raw: RawTileMap) -> Result<Self, Self::Error> {
        let RawTileMap {
            width,
            height,
            cells,
        } = raw;
        let expected = (width >= 0 && height >= 0)
            .then(|| (width as usize).checked_mul(height as usize))
            .flatten();
        if expected != Some(cells.len()) {
            return Err(ParseError::SizeMismatch {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let ch = if self.is_open(Point::new(x, y)) { OPEN } else { BLOCKED };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a [`TileMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input had no non-blank lines.
    Empty,
    /// A row's width differs from the first row.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `.` or `#` was found.
    InvalidChar { ch: char, pos: Point },
    /// Serialized dimensions do not match the number of cells.
    SizeMismatch {
        width: i32,
        height: i32,
        cells: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "tile map: empty input"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "tile map: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "tile map: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::SizeMismatch {
                width,
                height,
                cells,
            } => write!(f, "tile map: {width}x{height} does not fit {cells} cells"),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    const RING: &str = "
...
.#.
...
";

    #[test]
    fn new_is_all_open() {
        let m = TileMap::new(4, 3);
        assert_eq!(m.width(), 4);
        assert_eq!(m.height(), 3);
        assert_eq!(m.count_open(), 12);
        assert!(m.is_open(Point::new(3, 2)));
        assert!(!m.is_open(Point::new(4, 2)));
        assert_eq!(m.at(Point::new(-1, 0)), None);
    }

    #[test]
    fn set_and_fill() {
        let mut m = TileMap::new(3, 3);
        m.set_blocked(Point::new(1, 1));
        assert_eq!(m.at(Point::new(1, 1)), Some(false));
        assert_eq!(m.count_open(), 8);
        m.set(Point::new(9, 9), false);
        assert_eq!(m.count_open(), 8);
        m.fill(false);
        assert_eq!(m.count_open(), 0);
        m.set_open(Point::new(0, 2));
        assert!(m.is_open(Point::new(0, 2)));
    }

    #[test]
    fn parse_ring() {
        let m = TileMap::parse(RING).unwrap();
        assert_eq!(m.bounds(), Range::new(0, 0, 3, 3));
        assert!(!m.is_open(Point::new(1, 1)));
        assert_eq!(m.count_open(), 8);
        assert_eq!(m.to_string().trim(), RING.trim());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(TileMap::parse("\n\n"), Err(ParseError::Empty));
        assert_eq!(
            TileMap::parse("...\n..\n"),
            Err(ParseError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            TileMap::parse("..\n.x\n"),
            Err(ParseError::InvalidChar {
                ch: 'x',
                pos: Point::new(1, 1)
            })
        );
    }

    #[test]
    fn iter_row_major() {
        let m = TileMap::parse("#.\n..").unwrap();
        let cells: Vec<_> = m.iter().collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], (Point::new(0, 0), false));
        assert_eq!(cells[2], (Point::new(0, 1), true));
    }
}
