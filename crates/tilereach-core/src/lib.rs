//! **tilereach-core**: geometry and tile maps for movement-range queries.
//!
//! This crate provides the foundational types shared by the *tilereach*
//! crates: integer cell coordinates, axis-aligned directions, half-open
//! rectangles, and a dense open/blocked [`TileMap`].

pub mod geom;
pub mod tilemap;

pub use geom::{Direction, Point, Range, RangeIter};
pub use tilemap::{ParseError, TileMap};
