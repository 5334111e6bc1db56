//! Plotting.
//!
//! - `ascii`: fixed-size terminal plot for quick visual checks
//! - `chart`: SVG chart (Plotters) for sharing

pub mod ascii;
pub mod chart;

pub use ascii::*;
pub use chart::*;
