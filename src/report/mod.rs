//! Reporting utilities: run summaries and formatted terminal output.

pub mod format;

pub use format::*;

use crate::curve::value_at;
use crate::domain::{CurveSpec, Dataset, PROBE_GEV, Summary};
use crate::error::AppError;
use crate::regime::regime_shares;

/// Compute the headline numbers of a run.
pub fn summarize(spec: &CurveSpec, dataset: &Dataset) -> Result<Summary, AppError> {
    let min = dataset
        .min_record()
        .ok_or_else(|| AppError::new(4, "Cannot summarize an empty dataset."))?;
    let probe = dataset
        .nearest(PROBE_GEV)
        .ok_or_else(|| AppError::new(4, "Cannot summarize an empty dataset."))?;
    let zone_min = dataset.zone_min_record();

    let center_value = value_at(spec, spec.params.center)?;
    if !center_value.is_finite() {
        return Err(AppError::new(4, "Non-finite model value at the dip center."));
    }

    Ok(Summary {
        shape: spec.shape,
        center_gev: spec.params.center,
        center_tev: spec.params.center / 1000.0,
        center_value,
        min_x: min.x,
        min_value: min.value,
        zone_min_x: zone_min.map(|r| r.x),
        zone_min_value: zone_min.map(|r| r.value),
        zone_points: dataset.zone_records().count(),
        probe_x: probe.x,
        probe_value: probe.value,
        regimes: regime_shares(dataset, spec.params.center),
    })
}
