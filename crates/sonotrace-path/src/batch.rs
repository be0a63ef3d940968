use rayon::prelude::*;

use sonotrace_grid::CostGrid;

use crate::error::PathSearchError;
use crate::search::{solve, PathNode, PathSearchConfig, PathSearchResult};

/// Solve a batch of scan frames in parallel.
///
/// Frames are independent, so they are distributed over the rayon thread
/// pool; within each frame the column sweep stays sequential. Per-frame
/// failures are isolated: each frame yields its own `Result` in input
/// order, so a caller can skip a bad frame and keep the rest of the scan.
///
/// # Arguments
///
/// * `frames` - One `(grid, start)` pair per scan frame.
/// * `config` - Search parameters shared by all frames.
///
/// # Examples
///
/// ```
/// use sonotrace_grid::{CostGrid, GridSize};
/// use sonotrace_path::{midpoint_start, solve_batch, PathSearchConfig};
///
/// let frames = (0..4)
///     .map(|_| {
///         let grid = CostGrid::from_size_val(GridSize { rows: 8, cols: 6 }, 0.1).unwrap();
///         let start = midpoint_start(&grid);
///         (grid, start)
///     })
///     .collect::<Vec<_>>();
///
/// let results = solve_batch(&frames, &PathSearchConfig::default());
///
/// assert_eq!(results.len(), 4);
/// assert!(results.iter().all(|r| r.is_ok()));
/// ```
pub fn solve_batch(
    frames: &[(CostGrid, PathNode)],
    config: &PathSearchConfig,
) -> Vec<Result<PathSearchResult, PathSearchError>> {
    frames
        .par_iter()
        .map(|(grid, start)| solve(grid, *start, config))
        .collect()
}
