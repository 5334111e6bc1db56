//! Closed-form dip kernels.
//!
//! Both kernels take the distance from the center already scaled by the width,
//! `u = (x - center) / width`, so that callers validate `width` once.
//!
//! - `lorentzian(u) = 1 / (1 + u^2)`: peaks at 1 for `u = 0`, decays like `1/u^2`
//! - `logistic_suppression(u) = 1 / (1 + exp(-|u|))`: 1/2 at `u = 0`, recovers to 1

/// Unit-height Lorentzian profile.
pub fn lorentzian(u: f64) -> f64 {
    1.0 / (1.0 + u * u)
}

/// Symmetric logistic recovery factor in `[1/2, 1)`.
pub fn logistic_suppression(u: f64) -> f64 {
    1.0 / (1.0 + (-u.abs()).exp())
}
