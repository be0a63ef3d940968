use crate::error::GridError;

/// Grid size in cells.
///
/// A struct to represent the size of a cost lattice: `rows` vertical pixel
/// positions by `cols` horizontal scan columns.
///
/// # Examples
///
/// ```
/// use sonotrace_grid::GridSize;
///
/// let size = GridSize { rows: 151, cols: 289 };
///
/// assert_eq!(size.rows, 151);
/// assert_eq!(size.cols, 289);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    /// Number of rows (vertical pixel positions).
    pub rows: usize,
    /// Number of columns (horizontal scan positions).
    pub cols: usize,
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "GridSize {{ rows: {}, cols: {} }}", self.rows, self.cols)
    }
}

impl From<[usize; 2]> for GridSize {
    fn from(size: [usize; 2]) -> Self {
        GridSize {
            rows: size[0],
            cols: size[1],
        }
    }
}

/// An immutable 2D lattice of per-cell traversal costs.
///
/// Costs are stored row-major as `f64`. Every entry is finite or `+inf`;
/// NaN is rejected at construction. The typical source is an inverse
/// image-intensity probability map produced by an external image pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct CostGrid {
    size: GridSize,
    data: Vec<f64>,
}

impl CostGrid {
    /// Create a new cost grid from row-major data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the grid in cells.
    /// * `data` - Row-major cost values of length `rows * cols`.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is zero-sized, the data length does not
    /// match the size, or any entry is NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use sonotrace_grid::{CostGrid, GridSize};
    ///
    /// let grid = CostGrid::new(
    ///     GridSize { rows: 2, cols: 3 },
    ///     vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6],
    /// ).unwrap();
    ///
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.cols(), 3);
    /// assert_eq!(grid.get(1, 2), Some(0.6));
    /// ```
    pub fn new(size: GridSize, data: Vec<f64>) -> Result<Self, GridError> {
        if size.rows == 0 || size.cols == 0 {
            return Err(GridError::ZeroSize(size.rows, size.cols));
        }
        if data.len() != size.rows * size.cols {
            return Err(GridError::InvalidDataLength(
                size.rows * size.cols,
                data.len(),
            ));
        }
        if let Some(idx) = data.iter().position(|v| v.is_nan()) {
            return Err(GridError::NonFiniteCost(idx / size.cols, idx % size.cols));
        }
        Ok(Self { size, data })
    }

    /// Create a grid with every cell set to `val`.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is zero-sized or `val` is NaN.
    pub fn from_size_val(size: GridSize, val: f64) -> Result<Self, GridError> {
        Self::new(size, vec![val; size.rows.saturating_mul(size.cols)])
    }

    /// Create a grid from nested row vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, any row has a different
    /// length than the first, or any entry is NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use sonotrace_grid::CostGrid;
    ///
    /// let grid = CostGrid::from_rows(vec![vec![5.0, 1.0], vec![1.0, 5.0]]).unwrap();
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.cols(), 2);
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, GridError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, |r| r.len());
        if num_rows == 0 || num_cols == 0 {
            return Err(GridError::ZeroSize(num_rows, num_cols));
        }
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != num_cols {
                return Err(GridError::JaggedRows(i, num_cols, row.len()));
            }
            data.extend(row);
        }
        Self::new(
            GridSize {
                rows: num_rows,
                cols: num_cols,
            },
            data,
        )
    }

    /// Create a cost grid from a probability map.
    ///
    /// Converts per-pixel likelihoods into traversal costs as
    /// `cost = 0.5 - p`, so high-probability pixels become cheap to traverse
    /// and low-probability pixels expensive.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the map in cells.
    /// * `probabilities` - Row-major likelihood values of length `rows * cols`.
    ///
    /// # Errors
    ///
    /// Returns an error if the map is zero-sized, the data length does not
    /// match the size, or any entry is NaN.
    pub fn from_probability_map(size: GridSize, probabilities: &[f64]) -> Result<Self, GridError> {
        let data = probabilities.iter().map(|p| 0.5 - p).collect();
        Self::new(size, data)
    }

    /// The size of the grid in cells.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Number of rows (vertical pixel positions).
    pub fn rows(&self) -> usize {
        self.size.rows
    }

    /// Number of columns (horizontal scan positions).
    pub fn cols(&self) -> usize {
        self.size.cols
    }

    /// Get the cost at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.size.rows || col >= self.size.cols {
            return None;
        }
        Some(self.data[row * self.size.cols + col])
    }

    /// Get the underlying row-major data slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// The maximum value in the grid.
    ///
    /// NaN-free by construction, so the maximum is well defined.
    pub fn max_value(&self) -> f64 {
        self.data.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b))
    }
}
