//! The dip-curve generator.
//!
//! Given a `CurveSpec`, we:
//! - validate every parameter up front (no partial datasets)
//! - lay out the evenly spaced grid
//! - evaluate `value(x)` and `in_zone(x)` independently per point
//!
//! Points never depend on each other, so the parallel path is a plain
//! order-preserving map and yields a bit-identical `Dataset`.

use log::debug;
use rayon::prelude::*;

use crate::domain::{CurveRecord, CurveSpec, Dataset};
use crate::error::DipError;
use crate::math::linspace;
use crate::models::predict;

/// Grid size at which `Evaluation::Auto` switches to rayon.
pub const PARALLEL_MIN_POINTS: usize = 65_536;

/// How grid points are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Evaluation {
    /// Sequential below `PARALLEL_MIN_POINTS`, parallel above.
    #[default]
    Auto,
    Sequential,
    Parallel,
}

/// Check all parameters of `spec`.
pub fn validate(spec: &CurveSpec) -> Result<(), DipError> {
    let CurveSpec {
        grid, params, zone, ..
    } = spec;

    let finite = [
        ("grid.low", grid.low),
        ("grid.high", grid.high),
        ("center", params.center),
        ("width", params.width),
        ("baseline", params.baseline),
        ("depth", params.depth),
        ("zone.low", zone.low),
        ("zone.high", zone.high),
    ];
    for (name, v) in finite {
        if !v.is_finite() {
            return Err(DipError::NonFinite(name));
        }
    }

    if params.width <= 0.0 {
        return Err(DipError::NonPositiveWidth(params.width));
    }
    if grid.size <= 1 {
        return Err(DipError::GridTooSmall(grid.size));
    }
    if grid.low >= grid.high {
        return Err(DipError::EmptyGridRange {
            low: grid.low,
            high: grid.high,
        });
    }
    if zone.low > zone.high {
        return Err(DipError::InvertedZone {
            low: zone.low,
            high: zone.high,
        });
    }
    if zone.low < grid.low || zone.high > grid.high {
        return Err(DipError::ZoneOutsideGrid {
            zone_low: zone.low,
            zone_high: zone.high,
            grid_low: grid.low,
            grid_high: grid.high,
        });
    }
    Ok(())
}

/// Generate the dataset for `spec`.
pub fn generate(spec: &CurveSpec) -> Result<Dataset, DipError> {
    generate_with(spec, Evaluation::Auto)
}

/// Generate the dataset for `spec` with an explicit evaluation strategy.
pub fn generate_with(spec: &CurveSpec, evaluation: Evaluation) -> Result<Dataset, DipError> {
    validate(spec)?;
    let xs = linspace(spec.grid.low, spec.grid.high, spec.grid.size)?;

    let parallel = match evaluation {
        Evaluation::Auto => xs.len() >= PARALLEL_MIN_POINTS,
        Evaluation::Sequential => false,
        Evaluation::Parallel => true,
    };
    debug!(
        "Evaluating {} points ({}) with {:?}",
        xs.len(),
        if parallel { "parallel" } else { "sequential" },
        spec.shape
    );

    let records: Vec<CurveRecord> = if parallel {
        xs.par_iter().map(|&x| evaluate_point(spec, x)).collect()
    } else {
        xs.iter().map(|&x| evaluate_point(spec, x)).collect()
    };

    Ok(Dataset::from_records(records))
}

/// Evaluate the closed form of `spec` at an arbitrary coordinate.
pub fn value_at(spec: &CurveSpec, x: f64) -> Result<f64, DipError> {
    validate(spec)?;
    Ok(predict(spec.shape, x, &spec.params))
}

fn evaluate_point(spec: &CurveSpec, x: f64) -> CurveRecord {
    CurveRecord {
        x,
        value: predict(spec.shape, x, &spec.params),
        in_zone: spec.zone.contains(x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DipParams, DipShape, GridSpec, Preset, ZoneBounds};

    fn small_spec() -> CurveSpec {
        CurveSpec {
            grid: GridSpec {
                low: 0.0,
                high: 10.0,
                size: 11,
            },
            shape: DipShape::Lorentzian,
            params: DipParams {
                center: 4.0,
                width: 1.0,
                baseline: 10.0,
                depth: 5.0,
            },
            zone: ZoneBounds {
                low: 3.0,
                high: 5.0,
            },
        }
    }

    #[test]
    fn lhc_scenario() {
        let spec = Preset::Lorentzian.spec();
        let ds = generate(&spec).unwrap();
        assert_eq!(ds.len(), 1000);

        let at_center = value_at(&spec, 884.0).unwrap();
        assert!((at_center - 20.0).abs() < 1e-9, "value(884) = {at_center}");
        assert!(spec.zone.contains(884.0));

        let first = ds.nearest(200.0).unwrap();
        assert_eq!(first.x, 200.0);
        assert!((first.value - 100.0).abs() < 1.0, "value(200) = {}", first.value);
    }

    #[test]
    fn generation_is_deterministic() {
        for preset in Preset::ALL {
            let spec = preset.spec();
            let a = generate(&spec).unwrap();
            let b = generate(&spec).unwrap();
            assert_eq!(a, b);
            for (ra, rb) in a.iter().zip(b.iter()) {
                assert_eq!(ra.value.to_bits(), rb.value.to_bits());
            }
        }
    }

    #[test]
    fn parallel_matches_sequential_bitwise() {
        let mut spec = Preset::Lorentzian.spec();
        spec.grid.size = 20_000;
        let seq = generate_with(&spec, Evaluation::Sequential).unwrap();
        let par = generate_with(&spec, Evaluation::Parallel).unwrap();
        assert_eq!(seq.len(), par.len());
        for (a, b) in seq.iter().zip(par.iter()) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.value.to_bits(), b.value.to_bits());
            assert_eq!(a.in_zone, b.in_zone);
        }
    }

    #[test]
    fn records_are_ascending_with_exact_zone_flags() {
        let spec = Preset::Suppression.spec();
        let ds = generate(&spec).unwrap();
        for w in ds.records().windows(2) {
            assert!(w[1].x > w[0].x);
        }
        for r in &ds {
            assert_eq!(r.in_zone, spec.zone.low <= r.x && r.x <= spec.zone.high);
        }
        assert!(ds.zone_records().count() > 0);
    }

    #[test]
    fn small_grid_zone_flags_include_bounds() {
        let ds = generate(&small_spec()).unwrap();
        let flagged: Vec<f64> = ds.zone_records().map(|r| r.x).collect();
        assert_eq!(flagged, vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn minimum_sits_next_to_center() {
        for preset in Preset::ALL {
            let spec = preset.spec();
            let ds = generate(&spec).unwrap();
            let min = ds.min_record().unwrap();
            let nearest = ds.nearest(spec.params.center).unwrap();
            assert_eq!(min.x, nearest.x, "{preset:?}");
            assert!((min.x - spec.params.center).abs() <= spec.grid.spacing());
        }
    }

    #[test]
    fn far_points_recover_to_baseline() {
        let spec = Preset::Lorentzian.spec();
        let ds = generate(&spec).unwrap();
        let p = spec.params;
        for r in ds.iter().filter(|r| (r.x - p.center).abs() > 10.0 * p.width) {
            let d = (r.x - p.center).abs();
            let tol = p.depth * (p.width / d).powi(2) * (1.0 + 1e-9);
            assert!(
                (p.baseline - r.value).abs() <= tol,
                "x={} value={} tol={tol}",
                r.x,
                r.value
            );
        }
    }

    #[test]
    fn rejects_invalid_parameters() {
        let mut spec = small_spec();
        spec.params.width = 0.0;
        assert_eq!(generate(&spec), Err(DipError::NonPositiveWidth(0.0)));
        spec.params.width = -1.0;
        assert_eq!(generate(&spec), Err(DipError::NonPositiveWidth(-1.0)));

        let mut spec = small_spec();
        spec.grid.size = 1;
        assert_eq!(generate(&spec), Err(DipError::GridTooSmall(1)));

        let mut spec = small_spec();
        spec.grid.high = spec.grid.low;
        assert!(matches!(generate(&spec), Err(DipError::EmptyGridRange { .. })));

        let mut spec = small_spec();
        spec.zone = ZoneBounds { low: 6.0, high: 5.0 };
        assert!(matches!(generate(&spec), Err(DipError::InvertedZone { .. })));

        let mut spec = small_spec();
        spec.zone = ZoneBounds { low: 5.0, high: 11.0 };
        assert!(matches!(generate(&spec), Err(DipError::ZoneOutsideGrid { .. })));

        let mut spec = small_spec();
        spec.grid = GridSpec {
            low: 1.0,
            high: 1.0 + 1e-13,
            size: 1000,
        };
        spec.params.center = 1.0;
        spec.zone = ZoneBounds { low: 1.0, high: 1.0 };
        assert!(matches!(generate(&spec), Err(DipError::GridTooDense { .. })));

        let mut spec = small_spec();
        spec.grid.size = usize::MAX;
        assert_eq!(generate(&spec), Err(DipError::GridTooLarge(usize::MAX)));

        let mut spec = small_spec();
        spec.params.center = f64::NAN;
        assert_eq!(generate(&spec), Err(DipError::NonFinite("center")));
        assert!(value_at(&spec, 1.0).is_err());
    }
}
