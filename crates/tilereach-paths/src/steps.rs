use std::borrow::BorrowMut;
use std::iter::FusedIterator;

use tilereach_core::Point;

use crate::path::Path;
use crate::reach_range::ReachRange;
use crate::terrain::Terrain;
use crate::walk::Walker;

/// Lazy trace of a reachability search: one [`Path`] per cell pushed, in
/// visitation order.
///
/// Each item is the traversal's current path (destination first) right after
/// a push, so a cell may appear several times when a later branch reaches it
/// with more moves left. The first item is always the start cell alone.
///
/// Created by [`enumerate_steps`](crate::enumerate_steps) or
/// [`ReachRange::steps`].
pub struct Steps<'t, T: ?Sized, R = ReachRange> {
    walker: Walker<'t, T, R>,
}

impl<'t, T, R> Steps<'t, T, R>
where
    T: Terrain + ?Sized,
    R: BorrowMut<ReachRange>,
{
    pub(crate) fn new(walker: Walker<'t, T, R>) -> Self {
        Self { walker }
    }

    pub fn start(&self) -> Point {
        self.walker.start()
    }

    pub fn range(&self) -> i32 {
        self.walker.range()
    }

    /// Rewind to the beginning. The replay yields the identical sequence.
    pub fn restart(&mut self) {
        self.walker.restart();
    }
}

impl<T, R> Iterator for Steps<'_, T, R>
where
    T: Terrain + ?Sized,
    R: BorrowMut<ReachRange>,
{
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        self.walker.advance().map(Path::from_stack)
    }
}

impl<T, R> FusedIterator for Steps<'_, T, R>
where
    T: Terrain + ?Sized,
    R: BorrowMut<ReachRange>,
{
}

impl ReachRange {
    /// Trace a search step by step, reusing this context's buffers.
    ///
    /// See [`enumerate_steps`](crate::enumerate_steps).
    pub fn steps<'a, T: Terrain + ?Sized>(
        &'a mut self,
        terrain: &'a T,
        start: Point,
        range: i32,
    ) -> Result<Steps<'a, T, &'a mut ReachRange>, crate::InvalidArgument> {
        Walker::new(terrain, start, range, self).map(Steps::new)
    }
}

#[cfg(test)]
mod tests {
    use tilereach_core::TileMap;

    use super::*;
    use crate::{enumerate_steps, search};

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|&p| Point::from(p)).collect()
    }

    #[test]
    fn first_item_is_start() {
        let map = TileMap::new(4, 4);
        let mut steps = enumerate_steps(&map, Point::new(2, 1), 2).unwrap();
        let first = steps.next().unwrap();
        assert_eq!(first.points(), &[Point::new(2, 1)]);
        assert_eq!(steps.start(), Point::new(2, 1));
        assert_eq!(steps.range(), 2);
    }

    #[test]
    fn corridor_trace() {
        let map = TileMap::parse("...").unwrap();
        let trace: Vec<Vec<Point>> = enumerate_steps(&map, Point::new(0, 0), 2)
            .unwrap()
            .map(Vec::from)
            .collect();
        assert_eq!(
            trace,
            vec![
                pts(&[(0, 0)]),
                pts(&[(1, 0), (0, 0)]),
                pts(&[(2, 0), (1, 0), (0, 0)]),
            ]
        );
    }

    #[test]
    fn revisit_with_better_budget_is_traced() {
        // (0, 1) is first reached the long way round, then again directly.
        let map = TileMap::new(2, 2);
        let trace: Vec<Vec<Point>> = enumerate_steps(&map, Point::new(0, 0), 3)
            .unwrap()
            .map(Vec::from)
            .collect();
        assert_eq!(
            trace,
            vec![
                pts(&[(0, 0)]),
                pts(&[(1, 0), (0, 0)]),
                pts(&[(1, 1), (1, 0), (0, 0)]),
                pts(&[(0, 1), (1, 1), (1, 0), (0, 0)]),
                pts(&[(0, 1), (0, 0)]),
            ]
        );

        let result = search(&map, Point::new(0, 0), 3).unwrap();
        assert_eq!(result.get(Point::new(0, 1)).unwrap().points(), &pts(&[(0, 1), (0, 0)])[..]);
    }

    #[test]
    fn restart_replays_identically() {
        let map = TileMap::parse(
            "
.....
.#.#.
.....
..#..
",
        )
        .unwrap();
        let mut steps = enumerate_steps(&map, Point::new(2, 2), 3).unwrap();
        let first: Vec<Path> = steps.by_ref().collect();
        assert!(steps.next().is_none());
        steps.restart();
        let second: Vec<Path> = steps.collect();
        assert_eq!(first, second);

        let fresh: Vec<Path> = enumerate_steps(&map, Point::new(2, 2), 3).unwrap().collect();
        assert_eq!(first, fresh);
    }

    #[test]
    fn last_visit_of_each_cell_matches_search() {
        let map = TileMap::parse(
            "
..#...
......
.##.#.
......
",
        )
        .unwrap();
        let start = Point::new(1, 1);
        let result = search(&map, start, 4).unwrap();

        let mut last = std::collections::BTreeMap::new();
        let mut count = 0;
        for path in enumerate_steps(&map, start, 4).unwrap() {
            count += 1;
            last.insert(path.destination(), path);
        }
        assert!(count >= result.len());
        assert_eq!(last, result.into_paths());
    }

    #[test]
    fn steps_on_reused_context() {
        let map = TileMap::new(3, 3);
        let mut rr = ReachRange::new();
        let n = rr.steps(&map, Point::new(1, 1), 1).unwrap().count();
        assert_eq!(n, 5);
        assert_eq!(rr.moves_left_at(Point::new(1, 1)), Some(1));
        assert_eq!(rr.moves_left_at(Point::new(0, 1)), Some(0));
        assert_eq!(rr.moves_left_at(Point::new(0, 0)), None);
    }

    #[test]
    fn steps_reject_bad_arguments() {
        let map = TileMap::new(2, 2);
        assert!(enumerate_steps(&map, Point::new(0, 0), -1).is_err());
        assert!(enumerate_steps(&map, Point::new(2, 0), 1).is_err());
    }
}
