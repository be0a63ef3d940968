/// An error type for the path search engine.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PathSearchError {
    /// Error when the grid has zero rows or zero columns.
    #[error("Grid must have at least one row and one column")]
    EmptyGrid,

    /// Error when the start cell lies outside the grid.
    #[error("Start cell ({row}, {col}) outside grid of size {rows}x{cols}")]
    InvalidStart {
        /// Start row.
        row: usize,
        /// Start column.
        col: usize,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        cols: usize,
    },

    /// Error when a swept cell has no feasible next row. The zero
    /// displacement candidate makes this unreachable for valid grids, but
    /// it is checked rather than assumed.
    #[error("No feasible next row from cell ({row}, {col})")]
    NoFeasibleStep {
        /// Row of the cell without a feasible step.
        row: usize,
        /// Column of the cell without a feasible step.
        col: usize,
    },

    /// Error when a path node lies outside the probability map.
    #[error("Path node ({row}, {col}) outside map of size {rows}x{cols}")]
    NodeOutOfBounds {
        /// Node row.
        row: usize,
        /// Node column.
        col: usize,
        /// Number of rows in the map.
        rows: usize,
        /// Number of columns in the map.
        cols: usize,
    },
}
