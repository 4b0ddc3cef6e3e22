//! Displacement recurrence over bounded 2D point sets.
//!
//! A batch holds up to five subsets of up to forty lattice points. Each subset
//! is classified TRUE when some absolute displacement vector `(|dx|, |dy|)` is
//! shared by at least three distinct point pairs, FALSE otherwise.
//!
//! Layout
//! - `types`: `Point`, `Batch`, `Classification`, `DisplacementKey`.
//! - `cfg`: fixed bounds and the recurrence threshold.
//! - `validate`: batch → subset → point bounds checks (`BoundsError`).
//! - `classify`: the O(n²) pair enumeration with early exit.
//! - `eval`: composition of the two; the entry point for callers.
//! - `rand`: reproducible random batches for benches, tests, and the CLI.

pub mod cfg;
pub mod classify;
pub mod eval;
pub mod rand;
pub mod types;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use classify::{classify, find_recurrence, Recurrence};
pub use eval::{evaluate, evaluate_detailed};
pub use types::{Batch, Classification, DisplacementKey, Point};
pub use validate::{validate_batch, BoundsError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{draw_batch, Count, GenCfg, ReplayToken};
    pub use crate::{
        classify, evaluate, evaluate_detailed, find_recurrence, Batch, BoundsError,
        Classification, DisplacementKey, Point, Recurrence,
    };
}
