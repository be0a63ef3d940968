#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod batch;
pub use batch::solve_batch;

mod error;
pub use error::PathSearchError;

mod search;
pub use search::{midpoint_start, solve, PathNode, PathSearchConfig, PathSearchResult};

mod select;
pub use select::{select_confident, DEFAULT_CONFIDENCE_FRACTION};

mod state;
