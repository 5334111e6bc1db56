//! Model evaluation for the Lorentzian and logistic dip shapes.
//!
//! The generator relies on one primitive operation: predict `value(x)` given a
//! shape and its parameters. Callers are responsible for rejecting
//! `width <= 0` before calling into this module.

use crate::domain::{DipParams, DipShape};
use crate::math::{logistic_suppression, lorentzian};

/// Predict `value(x)` for the given shape.
pub fn predict(shape: DipShape, x: f64, params: &DipParams) -> f64 {
    let u = (x - params.center) / params.width;
    match shape {
        DipShape::Lorentzian => params.baseline - params.depth * lorentzian(u),
        DipShape::Logistic => params.baseline * logistic_suppression(u),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> DipParams {
        DipParams {
            center: 884.0,
            width: 34.0,
            baseline: 100.0,
            depth: 80.0,
        }
    }

    #[test]
    fn lorentzian_bottom_is_baseline_minus_depth() {
        let y = predict(DipShape::Lorentzian, 884.0, &params());
        assert!((y - 20.0).abs() <= 20.0 * 1e-9, "got {y}");
    }

    #[test]
    fn lorentzian_half_depth_at_one_width() {
        let p = params();
        let y = predict(DipShape::Lorentzian, p.center + p.width, &p);
        assert!((y - 60.0).abs() < 1e-12, "got {y}");
    }

    #[test]
    fn logistic_halves_baseline_at_center() {
        let y = predict(DipShape::Logistic, 884.0, &params());
        assert_eq!(y, 50.0);
    }

    #[test]
    fn both_shapes_recover_toward_baseline() {
        let p = params();
        for shape in [DipShape::Lorentzian, DipShape::Logistic] {
            let near = predict(shape, p.center + p.width, &p);
            let far = predict(shape, p.center + 100.0 * p.width, &p);
            assert!(near < far, "{shape:?}: {near} !< {far}");
            assert!(far <= p.baseline && p.baseline - far < 0.01, "{shape:?}: far={far}");
        }
    }
}
