//! Displacement classifier.
//!
//! Enumerate pairs `(i, j)`, `i < j`, in lexicographic order over the subset's
//! point order, bucket them by `DisplacementKey`, and stop as soon as one
//! bucket holds `RECURRENCE_THRESHOLD` pairs. Callers pass validated subsets;
//! the classifier itself does not check bounds.
//!
//! The threshold is three pairs. Two pairs sharing a key already happen for
//! every rectangle or parallelogram and do not count.

use serde::Serialize;
use std::collections::HashMap;

use crate::cfg::{MAX_POINTS, RECURRENCE_THRESHOLD};
use crate::types::{Classification, DisplacementKey, Point};

/// Witness for a TRUE classification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Recurrence {
    pub key: DisplacementKey,
    /// Index pairs sharing `key`, in enumeration order. The last one closed the search.
    pub pairs: Vec<(usize, usize)>,
}

/// First displacement key shared by `RECURRENCE_THRESHOLD` pairs, if any.
pub fn find_recurrence(points: &[Point]) -> Option<Recurrence> {
    let n = points.len();
    // Sized for a valid subset; larger slices grow the map on demand.
    let m = n.min(MAX_POINTS);
    let mut buckets: HashMap<DisplacementKey, Vec<(usize, usize)>> =
        HashMap::with_capacity(m * m.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            let key = points[i].displacement(&points[j]);
            let pairs = buckets.entry(key).or_default();
            pairs.push((i, j));
            if pairs.len() == RECURRENCE_THRESHOLD {
                tracing::trace!(?key, i, j, "recurrence");
                return Some(Recurrence {
                    key,
                    pairs: std::mem::take(pairs),
                });
            }
        }
    }
    None
}

/// TRUE iff some displacement is shared by at least `RECURRENCE_THRESHOLD` pairs.
#[inline]
pub fn classify(points: &[Point]) -> Classification {
    find_recurrence(points).is_some().into()
}
