use sonotrace_grid::CostGrid;

use crate::error::PathSearchError;
use crate::search::PathNode;

/// Fraction of the probability map maximum used by the scan pipeline to
/// keep a path point.
pub const DEFAULT_CONFIDENCE_FRACTION: f64 = 0.05;

/// Keep the path points the probability map is confident about.
///
/// A point survives when its map value exceeds `fraction` of the map
/// maximum; the rest of the path is dropped before the points are handed to
/// the calibration and registration stages.
///
/// # Arguments
///
/// * `probability` - The likelihood map the cost grid was derived from.
/// * `path` - The extracted centerline path.
/// * `fraction` - Cutoff as a fraction of the map maximum, typically
///   [`DEFAULT_CONFIDENCE_FRACTION`].
///
/// # Examples
///
/// ```
/// use sonotrace_grid::CostGrid;
/// use sonotrace_path::{select_confident, PathNode, DEFAULT_CONFIDENCE_FRACTION};
///
/// let map = CostGrid::from_rows(vec![vec![0.9, 0.01], vec![0.1, 0.8]]).unwrap();
/// let path = vec![PathNode::new(0, 0), PathNode::new(0, 1)];
///
/// let confident = select_confident(&map, &path, DEFAULT_CONFIDENCE_FRACTION).unwrap();
///
/// assert_eq!(confident, vec![PathNode::new(0, 0)]);
/// ```
pub fn select_confident(
    probability: &CostGrid,
    path: &[PathNode],
    fraction: f64,
) -> Result<Vec<PathNode>, PathSearchError> {
    let cutoff = fraction * probability.max_value();
    let mut confident = Vec::with_capacity(path.len());
    for node in path {
        let value =
            probability
                .get(node.row, node.col)
                .ok_or(PathSearchError::NodeOutOfBounds {
                    row: node.row,
                    col: node.col,
                    rows: probability.rows(),
                    cols: probability.cols(),
                })?;
        if value > cutoff {
            confident.push(*node);
        }
    }
    Ok(confident)
}
