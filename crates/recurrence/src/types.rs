//! Basic value types: lattice points, batches, displacement keys, outcomes.
//!
//! - `Point`: integer pair, serialized as `[x, y]`.
//! - `Batch`: optional list of optional subsets; `None` models an absent
//!   batch or subset (JSON `null`) so the validator can reject it explicitly.
//! - `DisplacementKey`: `(|dx|, |dy|)` used as the counting key.
//! - `Classification`: `TRUE` / `FALSE` per subset.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cfg::{COORD_MAX, COORD_MIN};

/// Lattice point `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    /// Both coordinates lie in `[COORD_MIN, COORD_MAX]`.
    #[inline]
    pub fn in_bounds(&self) -> bool {
        (COORD_MIN..=COORD_MAX).contains(&self.x) && (COORD_MIN..=COORD_MAX).contains(&self.y)
    }
    /// Absolute displacement to `other`; symmetric in its arguments.
    #[inline]
    pub fn displacement(&self, other: &Point) -> DisplacementKey {
        DisplacementKey {
            dx: self.x.abs_diff(other.x),
            dy: self.y.abs_diff(other.y),
        }
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for Point {
    #[inline]
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [i32; 2] {
    #[inline]
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Absolute coordinate differences of a point pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DisplacementKey {
    pub dx: u32,
    pub dy: u32,
}

/// Ordered collection of subsets submitted in one call.
///
/// Both the batch and its subsets may be absent. Construction never checks
/// bounds; `validate::validate_batch` does.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch {
    subsets: Option<Vec<Option<Vec<Point>>>>,
}

impl Batch {
    /// Batch with every subset present.
    pub fn new(subsets: Vec<Vec<Point>>) -> Self {
        Self {
            subsets: Some(subsets.into_iter().map(Some).collect()),
        }
    }
    /// Batch whose subsets may individually be absent.
    pub fn from_optional(subsets: Vec<Option<Vec<Point>>>) -> Self {
        Self {
            subsets: Some(subsets),
        }
    }
    /// The absent batch.
    pub fn absent() -> Self {
        Self { subsets: None }
    }
    #[inline]
    pub fn subsets(&self) -> Option<&[Option<Vec<Point>>]> {
        self.subsets.as_deref()
    }
    /// Number of subset slots, absent ones included. `None` for an absent batch.
    #[inline]
    pub fn slot_count(&self) -> Option<usize> {
        self.subsets.as_ref().map(Vec::len)
    }
}

impl From<Vec<Vec<Point>>> for Batch {
    fn from(subsets: Vec<Vec<Point>>) -> Self {
        Self::new(subsets)
    }
}

/// Per-subset outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Classification {
    True,
    False,
}

impl Classification {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::True => "TRUE",
            Classification::False => "FALSE",
        }
    }
    #[inline]
    pub fn is_true(&self) -> bool {
        matches!(self, Classification::True)
    }
}

impl From<bool> for Classification {
    #[inline]
    fn from(b: bool) -> Self {
        if b {
            Classification::True
        } else {
            Classification::False
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_is_absolute_and_symmetric() {
        let a = Point::new(1, 2);
        let b = Point::new(0, 1);
        assert_eq!(a.displacement(&b), DisplacementKey { dx: 1, dy: 1 });
        assert_eq!(b.displacement(&a), a.displacement(&b));
        // Opposite diagonals collapse onto the same key.
        let c = Point::new(0, 0);
        let d = Point::new(1, 1);
        let e = Point::new(1, 0);
        let f = Point::new(0, 1);
        assert_eq!(c.displacement(&d), e.displacement(&f));
    }

    #[test]
    fn in_bounds_edges() {
        assert!(Point::new(0, 0).in_bounds());
        assert!(Point::new(50, 50).in_bounds());
        assert!(Point::new(0, 50).in_bounds());
        assert!(!Point::new(-1, 0).in_bounds());
        assert!(!Point::new(0, -1).in_bounds());
        assert!(!Point::new(51, 0).in_bounds());
        assert!(!Point::new(0, 51).in_bounds());
    }

    #[test]
    fn batch_json_shape() {
        let b: Batch = serde_json::from_str("[[[0,0],[1,2]], null, []]").unwrap();
        let subsets = b.subsets().unwrap();
        assert_eq!(subsets.len(), 3);
        assert_eq!(
            subsets[0].as_deref(),
            Some(&[Point::new(0, 0), Point::new(1, 2)][..])
        );
        assert!(subsets[1].is_none());
        assert_eq!(subsets[2].as_deref(), Some(&[][..]));

        let absent: Batch = serde_json::from_str("null").unwrap();
        assert_eq!(absent, Batch::absent());
        assert_eq!(absent.slot_count(), None);
        assert_eq!(b.slot_count(), Some(3));
    }

    #[test]
    fn classification_strings() {
        assert_eq!(Classification::True.to_string(), "TRUE");
        assert_eq!(Classification::from(false).as_str(), "FALSE");
        let s = serde_json::to_string(&[Classification::True, Classification::False]).unwrap();
        assert_eq!(s, r#"["TRUE","FALSE"]"#);
    }
}
