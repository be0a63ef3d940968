#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod error;
pub use error::GridError;

mod grid;
pub use grid::{CostGrid, GridSize};
