//! Random valid batches (replay tokens).
//!
//! Purpose
//! - Reproducible inputs for benches, property tests, and `cli gen`.
//!
//! Model
//! - Draw the subset count, then per subset the point count, then coordinates
//!   uniformly in `[COORD_MIN, coord_max]`. Counts are clamped to the valid
//!   bounds, so every draw passes validation.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::cfg::{COORD_MAX, COORD_MIN, MAX_POINTS, MAX_SUBSETS, MIN_POINTS, MIN_SUBSETS};
use crate::types::{Batch, Point};

/// Count distribution for subsets per batch or points per subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Count {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl Count {
    fn sample<R: Rng>(&self, rng: &mut R, lo: usize, hi: usize) -> usize {
        match *self {
            Count::Fixed(n) => n.clamp(lo, hi),
            Count::Uniform { min, max } => {
                let a = min.clamp(lo, hi);
                let b = max.clamp(a, hi);
                rng.gen_range(a..=b)
            }
        }
    }
}

/// Batch sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenCfg {
    pub subsets: Count,
    pub points: Count,
    /// Upper coordinate bound for draws. Clamped to `[COORD_MIN, COORD_MAX]`.
    /// Small values crowd the points and make TRUE subsets likely.
    pub coord_max: i32,
}

impl Default for GenCfg {
    fn default() -> Self {
        Self {
            subsets: Count::Uniform {
                min: MIN_SUBSETS,
                max: MAX_SUBSETS,
            },
            points: Count::Uniform {
                min: MIN_POINTS,
                max: MAX_POINTS,
            },
            coord_max: COORD_MAX,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `n` points with coordinates in `[COORD_MIN, coord_max]`.
pub fn draw_subset<R: Rng>(rng: &mut R, n: usize, coord_max: i32) -> Vec<Point> {
    let hi = coord_max.clamp(COORD_MIN, COORD_MAX);
    (0..n)
        .map(|_| Point::new(rng.gen_range(COORD_MIN..=hi), rng.gen_range(COORD_MIN..=hi)))
        .collect()
}

/// Draw a batch that always passes validation.
pub fn draw_batch(cfg: GenCfg, tok: ReplayToken) -> Batch {
    let mut rng = tok.rng();
    let t = cfg.subsets.sample(&mut rng, MIN_SUBSETS, MAX_SUBSETS);
    let subsets = (0..t)
        .map(|_| {
            let n = cfg.points.sample(&mut rng, MIN_POINTS, MAX_POINTS);
            draw_subset(&mut rng, n, cfg.coord_max)
        })
        .collect();
    Batch::new(subsets)
}
