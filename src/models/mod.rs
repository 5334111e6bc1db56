//! Dip model implementations.
//!
//! Models are implemented as small, pure functions so that the generator and
//! the report code can stay generic over the closed form.

pub mod model;

pub use model::*;
