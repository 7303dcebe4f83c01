use tilereach_core::{Point, Range, TileMap};

/// Grid source for reachability queries: an open/blocked predicate plus bounds.
///
/// Valid coordinates are `[0, width) × [0, height)`. Implementations should
/// answer every method in O(1).
pub trait Terrain {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// Whether a unit can stand on `p`. Only called for points inside
    /// [`bounds`](Self::bounds).
    fn is_open(&self, p: Point) -> bool;

    /// The rectangle of valid coordinates. Negative dimensions count as zero.
    fn bounds(&self) -> Range {
        Range::new(0, 0, self.width().max(0), self.height().max(0))
    }

    /// Wrap this terrain so that cells for which `occupied` returns `true`
    /// are treated as blocked.
    fn with_blockers<F>(self, occupied: F) -> Blockers<Self, F>
    where
        Self: Sized,
        F: Fn(Point) -> bool,
    {
        Blockers {
            terrain: self,
            occupied,
        }
    }
}

impl<T: Terrain + ?Sized> Terrain for &T {
    fn width(&self) -> i32 {
        (**self).width()
    }

    fn height(&self) -> i32 {
        (**self).height()
    }

    fn is_open(&self, p: Point) -> bool {
        (**self).is_open(p)
    }

    fn bounds(&self) -> Range {
        (**self).bounds()
    }
}

impl Terrain for TileMap {
    fn width(&self) -> i32 {
        TileMap::width(self)
    }

    fn height(&self) -> i32 {
        TileMap::height(self)
    }

    fn is_open(&self, p: Point) -> bool {
        TileMap::is_open(self, p)
    }
}

/// A terrain with an extra occupancy predicate layered on top, such as the
/// cells held by other actors.
///
/// Created by [`Terrain::with_blockers`].
#[derive(Debug, Clone)]
pub struct Blockers<T, F> {
    terrain: T,
    occupied: F,
}

impl<T, F> Blockers<T, F> {
    /// Unwrap the inner terrain.
    pub fn into_inner(self) -> T {
        self.terrain
    }
}

impl<T: Terrain, F: Fn(Point) -> bool> Terrain for Blockers<T, F> {
    fn width(&self) -> i32 {
        self.terrain.width()
    }

    fn height(&self) -> i32 {
        self.terrain.height()
    }

    fn is_open(&self, p: Point) -> bool {
        self.terrain.is_open(p) && !(self.occupied)(p)
    }

    fn bounds(&self) -> Range {
        self.terrain.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tilemap_terrain_bounds() {
        let map = TileMap::new(4, 2);
        assert_eq!(Terrain::bounds(&map), Range::new(0, 0, 4, 2));
        assert_eq!((&map).width(), 4);
    }

    struct Inverted;

    impl Terrain for Inverted {
        fn width(&self) -> i32 {
            -5
        }

        fn height(&self) -> i32 {
            3
        }

        fn is_open(&self, _: Point) -> bool {
            true
        }
    }

    #[test]
    fn negative_dimensions_give_empty_bounds() {
        let t = Inverted;
        assert!(t.bounds().is_empty());
        assert!(!t.bounds().contains(Point::new(-1, 0)));
        assert!(crate::search(&t, Point::new(-1, 0), 2).is_err());
        assert!(crate::search(&t, Point::new(0, 0), 2).is_err());
    }

    #[test]
    fn blockers_close_occupied_cells() {
        let mut map = TileMap::new(3, 1);
        map.set_blocked(Point::new(2, 0));
        let actors: HashSet<Point> = [Point::new(1, 0)].into_iter().collect();
        let t = (&map).with_blockers(|p| actors.contains(&p));
        assert!(t.is_open(Point::new(0, 0)));
        assert!(!t.is_open(Point::new(1, 0)));
        assert!(!t.is_open(Point::new(2, 0)));
        assert_eq!(t.bounds(), map.bounds());
    }
}
