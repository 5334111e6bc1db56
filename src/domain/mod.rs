//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - curve inputs (`GridSpec`, `DipParams`, `ZoneBounds`, `DipShape`, `CurveSpec`)
//! - fixed parameter sets (`Preset`)
//! - generator outputs (`CurveRecord`, `Dataset`) and run summaries

pub mod types;

pub use types::*;
