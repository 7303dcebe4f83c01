use tilereach_core::{Point, Range};

/// Memo value for a cell not yet visited in the current search.
pub(crate) const UNVISITED: i32 = -1;

/// One level of the depth-first traversal: the cell and the index of the
/// next [`Direction::ALL`](tilereach_core::Direction::ALL) entry to try.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub(crate) pos: Point,
    pub(crate) next_dir: u8,
}

/// Reusable context for movement-range searches.
///
/// `ReachRange` owns the moves-left memo, the frame stack and the current
/// path buffer so that repeated queries reuse their capacity instead of
/// allocating. The free functions [`search`](crate::search()) and
/// [`enumerate_steps`](crate::enumerate_steps) build a fresh context per call.
#[derive(Debug, Clone, Default)]
pub struct ReachRange {
    // search box of the last query: terrain bounds ∩ [start - range, start + range]
    pub(crate) area: Range,
    // effective budget of the last query
    pub(crate) range: i32,
    // best moves-left per cell of `area`, row-major
    pub(crate) memo: Vec<i32>,
    pub(crate) frames: Vec<Frame>,
    // current path, start first
    pub(crate) path: Vec<Point>,
}

impl ReachRange {
    pub fn new() -> Self {
        Self::default()
    }

    /// The search box of the last query.
    #[inline]
    pub fn area(&self) -> Range {
        self.area
    }

    /// Best remaining budget recorded for `p` by the last query.
    ///
    /// Returns `None` if `p` is outside the search box or was not visited.
    /// After a completed search this is the effective budget minus the moves
    /// needed to reach `p`. The effective budget is the requested range,
    /// capped at one less than the terrain's cell count.
    pub fn moves_left_at(&self, p: Point) -> Option<i32> {
        let i = self.area.index_of(p)?;
        let v = *self.memo.get(i)?;
        (v != UNVISITED).then_some(v)
    }

    /// Prepare the buffers for a new traversal over `area`.
    pub(crate) fn reset(&mut self, area: Range, range: i32) {
        self.area = area;
        self.range = range;
        self.memo.clear();
        self.memo.resize(area.len(), UNVISITED);
        self.frames.clear();
        self.path.clear();
    }

    /// Push `p` onto the current path and record its remaining budget.
    pub(crate) fn enter(&mut self, p: Point, idx: usize) {
        self.path.push(p);
        self.memo[idx] = self.moves_left();
        self.frames.push(Frame { pos: p, next_dir: 0 });
    }

    /// Remaining budget at the top of the current path.
    #[inline]
    pub(crate) fn moves_left(&self) -> i32 {
        self.range + 1 - self.path.len() as i32
    }
}
