use std::fmt;

use tilereach_core::{Direction, Point};

/// A walkable route, stored destination first and start last.
///
/// A path always holds at least one point; a path of length one is the
/// start cell itself. Consecutive points are one axis-aligned step apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct Path(Vec<Point>);

impl Path {
    /// Build a path from a traversal stack ordered start first.
    pub(crate) fn from_stack(stack: &[Point]) -> Self {
        debug_assert!(!stack.is_empty());
        Self(stack.iter().rev().copied().collect())
    }

    /// The cell this path leads to.
    #[inline]
    pub fn destination(&self) -> Point {
        self.0[0]
    }

    /// The cell this path leaves from.
    #[inline]
    pub fn start(&self) -> Point {
        self.0[self.0.len() - 1]
    }

    /// Number of cells, start included.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of steps taken, `len() - 1`.
    #[inline]
    pub fn moves(&self) -> i32 {
        self.0.len() as i32 - 1
    }

    /// The cells, destination first.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    /// The step directions walking from start to destination.
    ///
    /// Useful to renderers picking a directional sprite per segment.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.0
            .windows(2)
            .rev()
            .filter_map(|w| Direction::from_delta(w[0] - w[1]))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Path> for Vec<Point> {
    fn from(p: Path) -> Self {
        p.0
    }
}

impl TryFrom<Vec<Point>> for Path {
    type Error = InvalidPath;

    /// Accepts a destination-first list of unit steps.
    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        if points.is_empty() {
            return Err(InvalidPath::Empty);
        }
        if let Some(i) = points
            .windows(2)
            .position(|w| Direction::from_delta(w[1] - w[0]).is_none())
        {
            return Err(InvalidPath::NotAdjacent {
                from: points[i],
                to: points[i + 1],
            });
        }
        Ok(Self(points))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" <- ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

/// Error returned when converting a point list into a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidPath {
    Empty,
    /// Two consecutive points are not one axis-aligned step apart.
    NotAdjacent { from: Point, to: Point },
}

impl fmt::Display for InvalidPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "path: no points"),
            Self::NotAdjacent { from, to } => {
                write!(f, "path: {from} and {to} are not adjacent")
            }
        }
    }
}

impl std::error::Error for InvalidPath {}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|&p| Point::from(p)).collect()
    }

    #[test]
    fn from_stack_reverses() {
        let p = Path::from_stack(&pts(&[(0, 0), (1, 0), (1, 1)]));
        assert_eq!(p.destination(), Point::new(1, 1));
        assert_eq!(p.start(), Point::new(0, 0));
        assert_eq!(p.len(), 3);
        assert_eq!(p.moves(), 2);
        assert!(!p.is_empty());
    }

    #[test]
    fn directions_run_start_to_destination() {
        let p = Path::from_stack(&pts(&[(1, 1), (0, 1), (0, 0), (1, 0)]));
        let dirs: Vec<_> = p.directions().collect();
        assert_eq!(dirs, vec![Direction::Left, Direction::Up, Direction::Right]);
    }

    #[test]
    fn single_cell_has_no_directions() {
        let p = Path::from_stack(&pts(&[(4, 4)]));
        assert_eq!(p.directions().count(), 0);
        assert_eq!(p.to_string(), "(4, 4)");
    }

    #[test]
    fn try_from_validates() {
        assert_eq!(Path::try_from(Vec::new()), Err(InvalidPath::Empty));
        assert_eq!(
            Path::try_from(pts(&[(0, 0), (1, 1)])),
            Err(InvalidPath::NotAdjacent {
                from: Point::new(0, 0),
                to: Point::new(1, 1)
            })
        );
        let p = Path::try_from(pts(&[(2, 0), (1, 0)])).unwrap();
        assert_eq!(p.to_string(), "(2, 0) <- (1, 0)");
    }
}
