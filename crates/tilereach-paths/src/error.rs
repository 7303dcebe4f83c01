use std::fmt;

use tilereach_core::{Point, Range};

/// Rejected search arguments. Raised before any traversal starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The move budget was below zero.
    NegativeRange(i32),
    /// The start cell lies outside the terrain.
    StartOutOfBounds { start: Point, bounds: Range },
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeRange(r) => write!(f, "invalid argument: negative range {r}"),
            Self::StartOutOfBounds { start, bounds } => {
                write!(f, "invalid argument: start {start} outside {bounds}")
            }
        }
    }
}

impl std::error::Error for InvalidArgument {}
