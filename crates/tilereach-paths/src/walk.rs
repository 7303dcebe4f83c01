//! Depth-first traversal with best-moves-left pruning.
//!
//! The walk is driven one push at a time by [`Walker::advance`], so the same
//! code backs both the final-result search and the step trace.

use std::borrow::BorrowMut;

use tilereach_core::{Direction, Point, Range};

use crate::error::InvalidArgument;
use crate::reach_range::ReachRange;
use crate::terrain::Terrain;

/// Validate arguments and compute the search box and effective budget.
///
/// A shortest path never repeats a cell, so the budget is capped at one less
/// than the number of cells in the terrain. This also keeps `budget + 1`
/// from overflowing.
pub(crate) fn search_area<T: Terrain + ?Sized>(
    terrain: &T,
    start: Point,
    range: i32,
) -> Result<(Range, i32), InvalidArgument> {
    if range < 0 {
        log::trace!("rejecting search from {start}: negative range {range}");
        return Err(InvalidArgument::NegativeRange(range));
    }
    let bounds = terrain.bounds();
    if !bounds.contains(start) {
        log::trace!("rejecting search: start {start} outside {bounds}");
        return Err(InvalidArgument::StartOutOfBounds { start, bounds });
    }
    let longest = i32::try_from(bounds.len().saturating_sub(1)).unwrap_or(i32::MAX - 1);
    let budget = range.min(longest).min(i32::MAX - 1);
    Ok((bounds.intersect(Range::around(start, budget)), budget))
}

pub(crate) struct Walker<'t, T: ?Sized, R> {
    terrain: &'t T,
    start: Point,
    range: i32,
    ctx: R,
    started: bool,
}

impl<'t, T, R> Walker<'t, T, R>
where
    T: Terrain + ?Sized,
    R: BorrowMut<ReachRange>,
{
    pub(crate) fn new(
        terrain: &'t T,
        start: Point,
        range: i32,
        mut ctx: R,
    ) -> Result<Self, InvalidArgument> {
        let (area, budget) = search_area(terrain, start, range)?;
        let rr: &mut ReachRange = ctx.borrow_mut();
        rr.reset(area, budget);
        Ok(Self {
            terrain,
            start,
            range,
            ctx,
            started: false,
        })
    }

    /// Rewind to the state right after [`new`](Self::new).
    pub(crate) fn restart(&mut self) {
        let rr: &mut ReachRange = self.ctx.borrow_mut();
        let (area, range) = (rr.area, rr.range);
        rr.reset(area, range);
        self.started = false;
    }

    pub(crate) fn start(&self) -> Point {
        self.start
    }

    /// The budget as requested by the caller, before capping.
    pub(crate) fn range(&self) -> i32 {
        self.range
    }

    /// Run until the next push and return the current path, start first.
    ///
    /// Returns `None` once the traversal has unwound completely.
    pub(crate) fn advance(&mut self) -> Option<&[Point]> {
        let rr: &mut ReachRange = self.ctx.borrow_mut();

        if !self.started {
            self.started = true;
            let idx = rr.area.index_of(self.start)?;
            rr.enter(self.start, idx);
            return Some(&rr.path);
        }

        loop {
            let moves_left = rr.moves_left();
            let frame = rr.frames.last_mut()?;
            let dir = match Direction::ALL.get(frame.next_dir as usize) {
                Some(&dir) if moves_left > 0 => dir,
                _ => {
                    rr.frames.pop();
                    rr.path.pop();
                    continue;
                }
            };
            frame.next_dir += 1;
            let next = frame.pos.step(dir);

            let Some(idx) = rr.area.index_of(next) else {
                continue;
            };
            if !self.terrain.is_open(next) || rr.memo[idx] >= moves_left - 1 {
                continue;
            }
            rr.enter(next, idx);
            return Some(&rr.path);
        }
    }
}
