//! Bounds validation for batches, subsets, and points.
//!
//! Scan order is batch → subset (in batch order) → point (in subset order).
//! The first violation wins; nothing after it is inspected.

use thiserror::Error;

use crate::cfg::{COORD_MAX, COORD_MIN, MAX_POINTS, MAX_SUBSETS, MIN_POINTS, MIN_SUBSETS};
use crate::types::{Batch, Point};

/// Bounds violations. Indices are 0-based.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum BoundsError {
    /// Batch absent, empty, or holding too many subsets.
    #[error(
        "batch is absent or holds a number of subsets outside of bounds [{}, {}]",
        MIN_SUBSETS,
        MAX_SUBSETS
    )]
    Batch,
    /// Subset absent, empty, or holding too many points.
    #[error(
        "points of subset {subset} are absent or their count is outside of bounds [{}, {}]",
        MIN_POINTS,
        MAX_POINTS
    )]
    Subset { subset: usize },
    /// A point coordinate lies outside `[COORD_MIN, COORD_MAX]`.
    #[error(
        "coordinates of subset {subset}, point {point} are outside of bounds [{}, {}]",
        COORD_MIN,
        COORD_MAX
    )]
    Coordinate { subset: usize, point: usize },
}

/// Validate the whole batch and return its subsets as slices, in batch order.
pub fn validate_batch(batch: &Batch) -> Result<Vec<&[Point]>, BoundsError> {
    let subsets = batch
        .subsets()
        .filter(|s| (MIN_SUBSETS..=MAX_SUBSETS).contains(&s.len()))
        .ok_or(BoundsError::Batch)?;
    subsets
        .iter()
        .enumerate()
        .map(|(i, s)| validate_subset(i, s.as_deref()))
        .collect()
}

/// Validate one subset (size, then coordinates). `index` is only used for reporting.
pub fn validate_subset(index: usize, points: Option<&[Point]>) -> Result<&[Point], BoundsError> {
    let points = points
        .filter(|p| (MIN_POINTS..=MAX_POINTS).contains(&p.len()))
        .ok_or(BoundsError::Subset { subset: index })?;
    if let Some(j) = points.iter().position(|p| !p.in_bounds()) {
        return Err(BoundsError::Coordinate {
            subset: index,
            point: j,
        });
    }
    Ok(points)
}
