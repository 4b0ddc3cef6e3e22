//! Batch evaluation: validate everything, then classify each subset in order.
//!
//! Validation covers the whole batch before the first classification, so a
//! bad subset at the end also suppresses results for the good ones before it.

use crate::classify::{classify, find_recurrence, Recurrence};
use crate::types::{Batch, Classification, Point};
use crate::validate::{validate_batch, BoundsError};

/// Classify every subset of `batch`. Output order equals subset order.
pub fn evaluate(batch: &Batch) -> Result<Vec<Classification>, BoundsError> {
    let subsets = validated(batch)?;
    Ok(subsets
        .into_iter()
        .enumerate()
        .map(|(i, points)| {
            let c = classify(points);
            tracing::debug!(subset = i, points = points.len(), result = %c, "classified");
            c
        })
        .collect())
}

/// Like `evaluate`, but returns the witness for each TRUE subset (`None` for FALSE).
pub fn evaluate_detailed(batch: &Batch) -> Result<Vec<Option<Recurrence>>, BoundsError> {
    let subsets = validated(batch)?;
    Ok(subsets
        .into_iter()
        .enumerate()
        .map(|(i, points)| {
            let r = find_recurrence(points);
            tracing::debug!(subset = i, points = points.len(), witness = ?r, "classified");
            r
        })
        .collect())
}

fn validated(batch: &Batch) -> Result<Vec<&[Point]>, BoundsError> {
    validate_batch(batch).inspect_err(|e| tracing::debug!(error = %e, "rejected"))
}
