//! Bounds and thresholds (fixed).
//!
//! Policy
//! - These are part of the problem statement, not tuning knobs. Error messages
//!   embed them, so changing one changes the user-visible text as well.

/// Smallest accepted number of subsets in a batch.
pub const MIN_SUBSETS: usize = 1;
/// Largest accepted number of subsets in a batch.
pub const MAX_SUBSETS: usize = 5;
/// Smallest accepted number of points in a subset.
pub const MIN_POINTS: usize = 1;
/// Largest accepted number of points in a subset.
pub const MAX_POINTS: usize = 40;
/// Inclusive lower bound for both coordinates.
pub const COORD_MIN: i32 = 0;
/// Inclusive upper bound for both coordinates.
pub const COORD_MAX: i32 = 50;
/// Number of pairs that must share a displacement for a TRUE classification.
pub const RECURRENCE_THRESHOLD: usize = 3;
