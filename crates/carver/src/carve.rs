//! Batched shape-from-silhouette evaluation.

use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::core::CarveConfig;
use crate::error::CarveError;
use crate::grid::SampleGrid;
use crate::mask::ViewMasks;
use crate::project::ViewProjection;
use crate::volume::OccupancyVolume;

/// Tuning knobs for one carve.
#[derive(Clone, Copy, Debug)]
pub struct CarveOpts {
    /// Samples evaluated per batch. Bounds the transient working set;
    /// the carved result is identical for every batch size.
    pub batch_size: usize,
}

impl Default for CarveOpts {
    fn default() -> Self {
        Self {
            batch_size: 2_000_000,
        }
    }
}

/// Carve with default options and no cancellation.
pub fn carve(config: &CarveConfig, masks: &ViewMasks) -> Result<OccupancyVolume, CarveError> {
    carve_with(config, masks, &CarveOpts::default(), None)
}

/// Carve the visual hull of three silhouettes into an occupancy volume.
///
/// A voxel is occupied only when its center projects to foreground in
/// all three views; any single background view excludes it. Batches are
/// independent read-only work items evaluated in parallel and gathered
/// in grid order, so concatenated batch results equal the unbatched
/// evaluation bit for bit.
///
/// A set `cancel` flag aborts the carve between batches with
/// [`CarveError::Cancelled`].
pub fn carve_with(
    config: &CarveConfig,
    masks: &ViewMasks,
    opts: &CarveOpts,
    cancel: Option<&AtomicBool>,
) -> Result<OccupancyVolume, CarveError> {
    config.validate()?;
    if opts.batch_size == 0 {
        return Err(CarveError::Config {
            reason: "batch size must be >= 1".into(),
        });
    }

    let grid = SampleGrid::new(config);
    let front = ViewProjection::front(&config.bounds, masks.front.width(), masks.front.height());
    let side = ViewProjection::side(&config.bounds, masks.side.width(), masks.side.height());
    let top = ViewProjection::top(&config.bounds, masks.top.width(), masks.top.height());

    let total = grid.sample_count();
    let batch_count = (total + opts.batch_size - 1) / opts.batch_size;

    let batches: Vec<Vec<bool>> = (0..batch_count)
        .into_par_iter()
        .map(|batch| {
            if let Some(flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    return Err(CarveError::Cancelled);
                }
            }
            let start = batch * opts.batch_size;
            let end = (start + opts.batch_size).min(total);
            Ok(evaluate_batch(&grid, masks, &front, &side, &top, start..end))
        })
        .collect::<Result<_, _>>()?;

    let mut flags = Vec::with_capacity(total);
    for batch in &batches {
        flags.extend_from_slice(batch);
    }
    OccupancyVolume::from_flags(&flags, config.resolution)
}

/// Evaluate one contiguous range of the sample grid's linear indices.
fn evaluate_batch(
    grid: &SampleGrid,
    masks: &ViewMasks,
    front: &ViewProjection,
    side: &ViewProjection,
    top: &ViewProjection,
    range: Range<usize>,
) -> Vec<bool> {
    range
        .map(|linear| {
            let sample = grid.sample_at(linear);
            let (fr, fc) = front.project(sample);
            let (sr, sc) = side.project(sample);
            let (tr, tc) = top.project(sample);
            masks.front.get(fr, fc) && masks.side.get(sr, sc) && masks.top.get(tr, tc)
        })
        .collect()
}
