//! Batch loading from JSON or CSV files.
//!
//! - JSON: `[[[x, y], ...], null, ...]`; `null` marks an absent batch or subset.
//! - CSV: header `subset,x,y`, one point per row. Rows keep file order within
//!   a subset. Subset indices that never appear below the largest one become
//!   absent subsets.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use recurrence::{Batch, Point};
use std::collections::BTreeMap;
use std::path::Path;

/// Largest subset index accepted from CSV. Anything above is a malformed file.
const MAX_CSV_SUBSET_INDEX: usize = 1024;

/// Load a batch, choosing the format by file extension (`.csv`, else JSON).
pub fn load_batch(path: &Path) -> Result<Batch> {
    let is_csv = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    let batch = if is_csv {
        load_csv(path)?
    } else {
        load_json(path)?
    };
    tracing::info!(path = %path.display(), subsets = ?batch.slot_count(), "loaded");
    Ok(batch)
}

fn load_json(path: &Path) -> Result<Batch> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

fn load_csv(path: &Path) -> Result<Batch> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let subset = int_column(&df, "subset")?;
    let x = int_column(&df, "x")?;
    let y = int_column(&df, "y")?;

    let mut grouped: BTreeMap<usize, Vec<Point>> = BTreeMap::new();
    for (row, ((s, x), y)) in subset.into_iter().zip(x).zip(y).enumerate() {
        let (Some(s), Some(x), Some(y)) = (s, x, y) else {
            bail!("row {row}: empty cell");
        };
        let s = usize::try_from(s)
            .ok()
            .filter(|&s| s <= MAX_CSV_SUBSET_INDEX)
            .with_context(|| format!("row {row}: subset index {s} out of range"))?;
        let point = Point::new(
            i32::try_from(x).with_context(|| format!("row {row}: x = {x} out of range"))?,
            i32::try_from(y).with_context(|| format!("row {row}: y = {y} out of range"))?,
        );
        grouped.entry(s).or_default().push(point);
    }

    let slots = grouped.last_key_value().map_or(0, |(&k, _)| k + 1);
    let mut subsets: Vec<Option<Vec<Point>>> = vec![None; slots];
    for (s, points) in grouped {
        subsets[s] = Some(points);
    }
    Ok(Batch::from_optional(subsets))
}

/// Integer cells of `name`, widened to `i64`. Float columns are rejected, not truncated.
fn int_column(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>> {
    let column = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?;
    if !column.dtype().is_integer() {
        bail!("column `{name}` must hold integers, found {}", column.dtype());
    }
    let series = column
        .cast(&DataType::Int64)
        .with_context(|| format!("column `{name}` does not fit in i64"))?;
    let values = series.i64()?.into_iter().collect();
    Ok(values)
}
