use std::collections::BTreeMap;
use std::collections::btree_map;

use tilereach_core::Point;

use crate::path::Path;

/// Every cell reached by a search, each with one shortest path back to the
/// start.
///
/// Iteration is row-major by destination.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reachable {
    pub(crate) start: Point,
    pub(crate) range: i32,
    #[cfg_attr(feature = "serde", serde(with = "paths_by_destination"))]
    pub(crate) paths: BTreeMap<Point, Path>,
}

impl Reachable {
    /// The cell the search started from.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The move budget the search ran with.
    pub fn range(&self) -> i32 {
        self.range
    }

    /// The path to `p`, if reached.
    pub fn get(&self, p: Point) -> Option<&Path> {
        self.paths.get(&p)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.paths.contains_key(&p)
    }

    /// Number of reached cells, the start included.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Never true for a completed search; the start is always present.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Steps needed to reach `p`, if reached.
    pub fn moves_to(&self, p: Point) -> Option<i32> {
        self.get(p).map(Path::moves)
    }

    /// Reached cells in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.paths.keys().copied()
    }

    /// `(destination, path)` pairs in row-major order.
    pub fn iter(&self) -> btree_map::Iter<'_, Point, Path> {
        self.paths.iter()
    }

    pub fn into_paths(self) -> BTreeMap<Point, Path> {
        self.paths
    }
}

impl<'a> IntoIterator for &'a Reachable {
    type Item = (&'a Point, &'a Path);
    type IntoIter = btree_map::Iter<'a, Point, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

// JSON object keys must be strings, so the map travels as a list of paths
// keyed by their own destination.
#[cfg(feature = "serde")]
mod paths_by_destination {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serializer};
    use tilereach_core::Point;

    use crate::path::Path;

    pub(super) fn serialize<S: Serializer>(
        paths: &BTreeMap<Point, Path>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(paths.values())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<Point, Path>, D::Error> {
        let list = Vec::<Path>::deserialize(deserializer)?;
        Ok(list.into_iter().map(|p| (p.destination(), p)).collect())
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use tilereach_core::TileMap;

    use super::*;

    #[test]
    fn reachable_round_trip() {
        let map = TileMap::parse("..#\n...").unwrap();
        let r = crate::search(&map, Point::new(0, 0), 3).unwrap();
        let json = serde_json::to_string(&r).unwrap();
        let back: Reachable = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }

    #[test]
    fn broken_path_is_rejected() {
        let json = r#"[{"x":0,"y":0},{"x":2,"y":0}]"#;
        assert!(serde_json::from_str::<Path>(json).is_err());
        assert!(serde_json::from_str::<Path>("[]").is_err());
    }
}
