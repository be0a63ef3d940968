use sonotrace_grid::CostGrid;

use crate::error::PathSearchError;
use crate::state::SearchState;

/// A cell of the cost grid visited by a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathNode {
    /// Row index (vertical pixel position).
    pub row: usize,
    /// Column index (horizontal scan position).
    pub col: usize,
}

impl PathNode {
    /// Create a new path node.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Structure to define the path search parameters.
///
/// The defaults are the values tuned for the ultrasound spine scans the
/// engine was developed on.
#[derive(Debug, Clone)]
pub struct PathSearchConfig {
    /// Maximum absolute row displacement allowed per column step.
    pub max_jump: usize,
    /// Row displacement beyond which the bend penalty applies.
    pub bend_threshold: usize,
    /// Additive cost surcharge for steps bending more than the threshold.
    pub bend_penalty: f64,
}

impl Default for PathSearchConfig {
    fn default() -> Self {
        Self {
            max_jump: 50,
            bend_threshold: 2,
            bend_penalty: 0.2,
        }
    }
}

/// Result of the path search.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSearchResult {
    /// Minimum cumulative cost from the start cell to the terminal column.
    pub min_cost: f64,
    /// One node per column from the start column to the last, monotone in
    /// column.
    pub path: Vec<PathNode>,
}

/// The conventional start cell for a scan frame: the vertical midpoint of
/// the first column.
///
/// # Examples
///
/// ```
/// use sonotrace_grid::{CostGrid, GridSize};
/// use sonotrace_path::midpoint_start;
///
/// let grid = CostGrid::from_size_val(GridSize { rows: 151, cols: 289 }, 0.0).unwrap();
/// let start = midpoint_start(&grid);
///
/// assert_eq!(start.row, 75);
/// assert_eq!(start.col, 0);
/// ```
pub fn midpoint_start(grid: &CostGrid) -> PathNode {
    PathNode::new(grid.rows() / 2, 0)
}

/// Minimum-cost monotone path from `start` to the last column of `grid`.
///
/// Each step advances exactly one column and may move to any row within
/// `max_jump` of the current row; steps whose row displacement exceeds
/// `bend_threshold` pay an additive `bend_penalty`. The terminal column has
/// cost zero, so a cell's cumulative cost is its own grid value plus the
/// best reachable next-column cost. Ties between candidate next rows go to
/// the lowest row index.
///
/// The recurrence is evaluated as a backward sweep from the last column to
/// the start column, so each column is fully resolved before the preceding
/// one reads it and no recursion depth is involved.
///
/// # Arguments
///
/// * `grid` - The cost lattice to search.
/// * `start` - The start cell, conventionally [`midpoint_start`].
/// * `config` - Window size and bend penalty parameters.
///
/// # Returns
///
/// The minimum cost and the path, one node per column from `start.col` to
/// the last column.
///
/// # Examples
///
/// ```
/// use sonotrace_grid::CostGrid;
/// use sonotrace_path::{solve, PathNode, PathSearchConfig};
///
/// let grid = CostGrid::from_rows(vec![vec![5.0, 1.0], vec![1.0, 5.0]]).unwrap();
/// let config = PathSearchConfig { max_jump: 1, ..Default::default() };
///
/// let result = solve(&grid, PathNode::new(0, 0), &config).unwrap();
///
/// assert_eq!(result.min_cost, 5.0);
/// assert_eq!(result.path, vec![PathNode::new(0, 0), PathNode::new(0, 1)]);
/// ```
pub fn solve(
    grid: &CostGrid,
    start: PathNode,
    config: &PathSearchConfig,
) -> Result<PathSearchResult, PathSearchError> {
    let (rows, cols) = (grid.rows(), grid.cols());
    if rows == 0 || cols == 0 {
        return Err(PathSearchError::EmptyGrid);
    }
    if start.row >= rows || start.col >= cols {
        return Err(PathSearchError::InvalidStart {
            row: start.row,
            col: start.col,
            rows,
            cols,
        });
    }

    let now = std::time::Instant::now();
    let mut state = SearchState::new(grid.size());

    // terminal column: cost zero, no further step
    for row in 0..rows {
        state.set(row, cols - 1, 0.0, None);
    }

    // backward sweep; column col reads only the fully resolved column col+1
    for col in (start.col..cols - 1).rev() {
        for row in 0..rows {
            let lo = row.saturating_sub(config.max_jump);
            let hi = (row + config.max_jump).min(rows - 1);

            let mut best: Option<(f64, usize)> = None;
            for next_row in lo..=hi {
                let next_cost = state
                    .cost(next_row, col + 1)
                    .ok_or(PathSearchError::NoFeasibleStep { row, col })?;
                let step_cost = if row.abs_diff(next_row) > config.bend_threshold {
                    next_cost + config.bend_penalty
                } else {
                    next_cost
                };
                // strict comparison keeps the first (lowest) row on ties
                if best.map_or(true, |(cost, _)| step_cost < cost) {
                    best = Some((step_cost, next_row));
                }
            }

            let (min_step, next_row) =
                best.ok_or(PathSearchError::NoFeasibleStep { row, col })?;
            let cell_cost = grid.as_slice()[row * cols + col];
            state.set(row, col, cell_cost + min_step, Some(next_row));
        }
    }

    // walk the next-row table forward from the start
    let mut path = Vec::with_capacity(cols - start.col);
    let mut row = start.row;
    for col in start.col..cols {
        path.push(PathNode::new(row, col));
        if col < cols - 1 {
            row = state
                .next(row, col)
                .ok_or(PathSearchError::NoFeasibleStep { row, col })?;
        }
    }

    let min_cost = state
        .cost(start.row, start.col)
        .ok_or(PathSearchError::NoFeasibleStep {
            row: start.row,
            col: start.col,
        })?;

    log::debug!(
        "path search over {}x{} grid from ({}, {}) took {:?}",
        rows,
        cols,
        start.row,
        start.col,
        now.elapsed()
    );

    Ok(PathSearchResult { min_cost, path })
}

#[cfg(test)]
mod tests {
    use super::{midpoint_start, solve, PathNode, PathSearchConfig, PathSearchResult};
    use crate::error::PathSearchError;
    use approx::assert_relative_eq;
    use sonotrace_grid::{CostGrid, GridError, GridSize};

    fn solve_grid(
        rows: Vec<Vec<f64>>,
        start: PathNode,
        config: &PathSearchConfig,
    ) -> Result<PathSearchResult, Box<dyn std::error::Error>> {
        let grid = CostGrid::from_rows(rows)?;
        Ok(solve(&grid, start, config)?)
    }

    #[test]
    fn golden_two_by_two() -> Result<(), Box<dyn std::error::Error>> {
        let config = PathSearchConfig {
            max_jump: 1,
            bend_threshold: 2,
            bend_penalty: 0.2,
        };
        let result = solve_grid(
            vec![vec![5.0, 1.0], vec![1.0, 5.0]],
            PathNode::new(0, 0),
            &config,
        )?;

        // both next rows reach the terminal column for free, so the tie
        // goes to row 0 and only the start cell's cost is paid
        assert_relative_eq!(result.min_cost, 5.0);
        assert_eq!(result.path, vec![PathNode::new(0, 0), PathNode::new(0, 1)]);
        Ok(())
    }

    #[test]
    fn single_column_is_terminal() -> Result<(), Box<dyn std::error::Error>> {
        let grid = CostGrid::from_size_val(GridSize { rows: 4, cols: 1 }, 7.0)?;
        let result = solve(&grid, PathNode::new(2, 0), &PathSearchConfig::default())?;

        assert_relative_eq!(result.min_cost, 0.0);
        assert_eq!(result.path, vec![PathNode::new(2, 0)]);
        Ok(())
    }

    #[test]
    fn tie_break_picks_lowest_row() -> Result<(), Box<dyn std::error::Error>> {
        // symmetric cost valley: rows 0 and 2 tie from the middle start
        let config = PathSearchConfig {
            max_jump: 1,
            ..Default::default()
        };
        let result = solve_grid(
            vec![vec![0.0, 0.0], vec![0.0, 9.0], vec![0.0, 0.0]],
            PathNode::new(1, 0),
            &config,
        )?;

        assert_eq!(result.path[1].row, 0);
        Ok(())
    }

    #[test]
    fn zero_displacement_beats_penalized_jumps() -> Result<(), Box<dyn std::error::Error>> {
        // all costs tie at zero, so only the bend penalty differentiates;
        // with the threshold at zero the straight step is the unique minimum
        let config = PathSearchConfig {
            max_jump: 3,
            bend_threshold: 0,
            bend_penalty: 0.2,
        };
        let grid = CostGrid::from_size_val(GridSize { rows: 7, cols: 2 }, 0.0)?;
        let result = solve(&grid, PathNode::new(3, 0), &config)?;

        assert_relative_eq!(result.min_cost, 0.0);
        assert_eq!(result.path, vec![PathNode::new(3, 0), PathNode::new(3, 1)]);
        Ok(())
    }

    #[test]
    fn bend_penalty_trades_off_against_cost() -> Result<(), Box<dyn std::error::Error>> {
        // middle column offers a cheap cell five rows away; taking it pays
        // the bend penalty, so the choice flips with the penalty size
        let rows = vec![
            vec![1.0, 1.0, 0.0],
            vec![0.0, 10.0, 0.0],
            vec![0.0, 10.0, 0.0],
            vec![0.0, 10.0, 0.0],
            vec![0.0, 10.0, 0.0],
            vec![0.0, 0.5, 0.0],
        ];

        let cheap_penalty = PathSearchConfig {
            max_jump: 5,
            bend_threshold: 2,
            bend_penalty: 0.2,
        };
        let result = solve_grid(rows.clone(), PathNode::new(0, 0), &cheap_penalty)?;
        assert_eq!(result.path[1].row, 5);
        assert_relative_eq!(result.min_cost, 1.0 + 0.5 + 0.2);

        let steep_penalty = PathSearchConfig {
            bend_penalty: 0.6,
            ..cheap_penalty
        };
        let result = solve_grid(rows, PathNode::new(0, 0), &steep_penalty)?;
        assert_eq!(result.path[1].row, 0);
        assert_relative_eq!(result.min_cost, 1.0 + 1.0);
        Ok(())
    }

    #[test]
    fn zero_jump_keeps_row_constant() -> Result<(), Box<dyn std::error::Error>> {
        let config = PathSearchConfig {
            max_jump: 0,
            ..Default::default()
        };
        let result = solve_grid(
            vec![
                vec![9.0, 9.0, 9.0, 9.0],
                vec![1.0, 2.0, 3.0, 4.0],
                vec![9.0, 9.0, 9.0, 9.0],
            ],
            PathNode::new(1, 0),
            &config,
        )?;

        assert!(result.path.iter().all(|node| node.row == 1));
        // straight-line cost: every column but the terminal one
        assert_relative_eq!(result.min_cost, 1.0 + 2.0 + 3.0);
        Ok(())
    }

    #[test]
    fn start_in_middle_column() -> Result<(), Box<dyn std::error::Error>> {
        let grid = CostGrid::from_size_val(GridSize { rows: 3, cols: 5 }, 0.5)?;
        let result = solve(&grid, PathNode::new(0, 2), &PathSearchConfig::default())?;

        assert_eq!(result.path.len(), 3);
        assert_eq!(result.path[0], PathNode::new(0, 2));
        assert_eq!(result.path[2].col, 4);
        assert_relative_eq!(result.min_cost, 0.5 + 0.5);
        Ok(())
    }

    #[test]
    fn invalid_start_is_rejected() -> Result<(), GridError> {
        let grid = CostGrid::from_size_val(GridSize { rows: 3, cols: 5 }, 0.0)?;
        let result = solve(&grid, PathNode::new(3, 0), &PathSearchConfig::default());
        assert_eq!(
            result.map(|_| ()),
            Err(PathSearchError::InvalidStart {
                row: 3,
                col: 0,
                rows: 3,
                cols: 5
            })
        );

        let result = solve(&grid, PathNode::new(0, 5), &PathSearchConfig::default());
        assert!(matches!(
            result,
            Err(PathSearchError::InvalidStart { col: 5, .. })
        ));
        Ok(())
    }

    #[test]
    fn infinite_costs_stay_unselected() -> Result<(), Box<dyn std::error::Error>> {
        // the middle column's top row is a wall; the path detours below it
        let config = PathSearchConfig {
            max_jump: 1,
            ..Default::default()
        };
        let result = solve_grid(
            vec![
                vec![0.0, f64::INFINITY, 0.0],
                vec![5.0, 1.0, 0.0],
            ],
            PathNode::new(0, 0),
            &config,
        )?;

        assert_eq!(result.path[1].row, 1);
        assert_relative_eq!(result.min_cost, 0.0 + 1.0);
        Ok(())
    }

    #[test]
    fn path_covers_every_column() -> Result<(), Box<dyn std::error::Error>> {
        let rows = 12;
        let cols = 30;
        for trial in 0..20 {
            let data = (0..rows * cols).map(|_| rand::random::<f64>()).collect();
            let grid = CostGrid::new(GridSize { rows, cols }, data)?;
            let start = PathNode::new(trial % rows, trial % cols);
            let result = solve(&grid, start, &PathSearchConfig::default())?;

            assert_eq!(result.path.len(), cols - start.col);
            for (offset, node) in result.path.iter().enumerate() {
                assert_eq!(node.col, start.col + offset);
            }
            for step in result.path.windows(2) {
                assert!(step[0].row.abs_diff(step[1].row) <= 50);
            }
        }
        Ok(())
    }

    #[test]
    fn tighter_window_never_improves_cost() -> Result<(), Box<dyn std::error::Error>> {
        let rows = 8;
        let cols = 10;
        for _ in 0..20 {
            let data = (0..rows * cols).map(|_| rand::random::<f64>()).collect();
            let grid = CostGrid::new(GridSize { rows, cols }, data)?;
            let start = midpoint_start(&grid);

            let tight = PathSearchConfig {
                max_jump: 1,
                ..Default::default()
            };
            let wide = PathSearchConfig {
                max_jump: 3,
                ..Default::default()
            };
            let tight_cost = solve(&grid, start, &tight)?.min_cost;
            let wide_cost = solve(&grid, start, &wide)?.min_cost;

            assert!(tight_cost >= wide_cost);
        }
        Ok(())
    }

    #[test]
    fn midpoint_start_floors() -> Result<(), GridError> {
        let grid = CostGrid::from_size_val(GridSize { rows: 151, cols: 10 }, 0.0)?;
        assert_eq!(midpoint_start(&grid), PathNode::new(75, 0));
        Ok(())
    }
}
