use sonotrace_grid::GridSize;

/// Sentinel for cells with no recorded next row (terminal column cells).
const UNSET: usize = usize::MAX;

/// Per-solve dynamic programming tables.
///
/// One entry per grid cell: the best known cumulative cost to reach the
/// terminal column from that cell, and the next-column row chosen to achieve
/// it. A separate `visited` flag distinguishes "not yet computed" from a
/// legitimately infinite (unreachable) cost, so the `+inf` initial value is
/// never read as a result.
pub(crate) struct SearchState {
    size: GridSize,
    best_cost: Vec<f64>,
    next_row: Vec<usize>,
    visited: Vec<bool>,
}

impl SearchState {
    /// Allocate tables for a grid of the given size, all cells unvisited.
    pub(crate) fn new(size: GridSize) -> Self {
        let len = size.rows * size.cols;
        Self {
            size,
            best_cost: vec![f64::INFINITY; len],
            next_row: vec![UNSET; len],
            visited: vec![false; len],
        }
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size.rows && col < self.size.cols);
        row * self.size.cols + col
    }

    /// The cumulative cost at `(row, col)`, or `None` if not yet computed.
    pub(crate) fn cost(&self, row: usize, col: usize) -> Option<f64> {
        let idx = self.idx(row, col);
        self.visited[idx].then_some(self.best_cost[idx])
    }

    /// The chosen next row at `(row, col)`, or `None` if not yet computed
    /// or the cell is terminal.
    pub(crate) fn next(&self, row: usize, col: usize) -> Option<usize> {
        let idx = self.idx(row, col);
        (self.visited[idx] && self.next_row[idx] != UNSET).then_some(self.next_row[idx])
    }

    /// Record the result for `(row, col)` and mark it visited.
    pub(crate) fn set(&mut self, row: usize, col: usize, cost: f64, next: Option<usize>) {
        let idx = self.idx(row, col);
        self.best_cost[idx] = cost;
        self.next_row[idx] = next.unwrap_or(UNSET);
        self.visited[idx] = true;
    }
}
