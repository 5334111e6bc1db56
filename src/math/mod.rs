//! Mathematical utilities: dip kernels and grid spacing.

pub mod grid;
pub mod kernel;

pub use grid::*;
pub use kernel::*;
