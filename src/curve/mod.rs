//! Dip-curve generation.
//!
//! Responsibilities:
//!
//! - reject invalid parameters before anything is evaluated
//! - build the sample grid
//! - evaluate the chosen closed form and the zone flag at every grid point

pub mod generator;

pub use generator::*;
