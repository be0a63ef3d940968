/// An error type for cost grid construction and access.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GridError {
    /// Error when the grid has zero rows or zero columns.
    #[error("Grid must have at least one row and one column, got {0}x{1}")]
    ZeroSize(usize, usize),

    /// Error when the data length does not match the grid size.
    #[error("Data length ({1}) does not match the grid size ({0})")]
    InvalidDataLength(usize, usize),

    /// Error when the rows of a nested input have unequal lengths.
    #[error("Row {0} has length {2}, expected {1}")]
    JaggedRows(usize, usize, usize),

    /// Error when an entry is NaN. Costs must be finite or +inf.
    #[error("Cost at ({0}, {1}) is NaN")]
    NonFiniteCost(usize, usize),
}
