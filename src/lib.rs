//! `dip-curves` library crate.
//!
//! The binary (`dip`) is a thin wrapper around this library so that:
//!
//! - the generator is testable without spawning processes
//! - exports and rendering stay separate consumers of the same `Dataset`

pub mod app;
pub mod cli;
pub mod curve;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod regime;
pub mod report;
