use std::collections::BTreeMap;

use tilereach_core::Point;

use crate::error::InvalidArgument;
use crate::path::Path;
use crate::reach_range::ReachRange;
use crate::reachable::Reachable;
use crate::steps::Steps;
use crate::terrain::Terrain;
use crate::walk::Walker;

/// Find every cell reachable from `start` within `range` axis-aligned steps,
/// with one shortest path to each.
///
/// Blocked cells are never entered; the start cell itself is always part of
/// the result, even when blocked. Fails with [`InvalidArgument`] if `range`
/// is negative or `start` lies outside the terrain.
///
/// Allocates a fresh [`ReachRange`]; use [`ReachRange::search`] to reuse
/// buffers across queries.
pub fn search<T: Terrain + ?Sized>(
    terrain: &T,
    start: Point,
    range: i32,
) -> Result<Reachable, InvalidArgument> {
    ReachRange::new().search(terrain, start, range)
}

/// Trace the traversal behind [`search()`] one push at a time.
///
/// The returned iterator is lazy and owns its buffers; see [`Steps`].
pub fn enumerate_steps<T: Terrain + ?Sized>(
    terrain: &T,
    start: Point,
    range: i32,
) -> Result<Steps<'_, T>, InvalidArgument> {
    Walker::new(terrain, start, range, ReachRange::new()).map(Steps::new)
}

impl ReachRange {
    /// Compute the reachable set from `start`, reusing this context's buffers.
    ///
    /// Same semantics as the free function [`search`](crate::search()).
    ///
    /// Each cell's path is the one recorded on its last visit. A cell is only
    /// revisited with strictly more moves left, so ties between equally short
    /// routes go to the first one found in left, right, up, down order.
    pub fn search<T: Terrain + ?Sized>(
        &mut self,
        terrain: &T,
        start: Point,
        range: i32,
    ) -> Result<Reachable, InvalidArgument> {
        let mut walker = Walker::new(terrain, start, range, &mut *self)?;
        let mut paths = BTreeMap::new();
        let mut pushes = 0usize;
        while let Some(stack) = walker.advance() {
            let path = Path::from_stack(stack);
            paths.insert(path.destination(), path);
            pushes += 1;
        }

        log::debug!(
            "reach search from {start} range {range}: {} cells in {} pushes (area {})",
            paths.len(),
            pushes,
            self.area,
        );

        Ok(Reachable {
            start,
            range,
            paths,
        })
    }
}
