#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use sonotrace_grid as grid;

#[doc(inline)]
pub use sonotrace_path as path;
