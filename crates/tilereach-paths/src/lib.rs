//! Bounded reachable-path search for tile-based movement.
//!
//! Given a start cell, a move budget and a grid of open and blocked cells,
//! this crate finds every cell reachable within the budget together with one
//! shortest path to it:
//!
//! - [`search()`] returns the final [`Reachable`] map (destination → [`Path`]).
//! - [`enumerate_steps`] returns a lazy [`Steps`] trace of every intermediate
//!   path, in visitation order, for animating the search.
//!
//! Both run the same depth-first traversal. A per-cell "best moves left"
//! memo prunes any revisit that does not bring strictly more budget, which
//! keeps the walk polynomial and makes every recorded path a shortest one.
//! Ties between equally short routes are broken by the fixed neighbour order
//! left, right, up, down.
//!
//! [`ReachRange`] owns the traversal buffers and can be kept around so that
//! repeated queries stop allocating after warm-up.
//!
//! The grid is anything implementing [`Terrain`]; [`TileMap`] is provided,
//! and [`Terrain::with_blockers`] layers an occupancy predicate on top.
//!
//! [`TileMap`]: tilereach_core::TileMap

mod error;
mod path;
mod reach_range;
mod reachable;
mod search;
mod steps;
mod terrain;
mod walk;

pub use error::InvalidArgument;
pub use path::{InvalidPath, Path};
pub use reach_range::ReachRange;
pub use reachable::Reachable;
pub use search::{enumerate_steps, search};
pub use steps::Steps;
pub use terrain::{Blockers, Terrain};
