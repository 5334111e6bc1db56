//! Evenly spaced sample grids.

use crate::error::DipError;

/// Largest grid the generator will lay out.
pub const MAX_GRID_POINTS: usize = 1 << 26;

/// Generate `steps` evenly spaced points between `low` and `high` (inclusive).
///
/// Points are computed as `low + i * step` and the last point is pinned to
/// `high`, so both endpoints are exact. Grids whose neighbouring points
/// f64 cannot keep distinct are rejected before anything is allocated.
pub fn linspace(low: f64, high: f64, steps: usize) -> Result<Vec<f64>, DipError> {
    if !low.is_finite() {
        return Err(DipError::NonFinite("grid.low"));
    }
    if !high.is_finite() {
        return Err(DipError::NonFinite("grid.high"));
    }
    if low >= high {
        return Err(DipError::EmptyGridRange { low, high });
    }
    if steps < 2 {
        return Err(DipError::GridTooSmall(steps));
    }

    if steps > MAX_GRID_POINTS {
        return Err(DipError::GridTooLarge(steps));
    }

    let step = (high - low) / (steps as f64 - 1.0);

    // Each point carries at most a couple of ulps of rounding at the grid's
    // magnitude; the step must clear that for neighbours to stay ordered.
    let scale = low.abs().max(high.abs());
    let last_free = low + step * (steps - 2) as f64;
    if !(step > 4.0 * f64::EPSILON * scale) || !(low + step > low) || !(last_free < high) {
        return Err(DipError::GridTooDense { low, high, size: steps });
    }

    let mut out = Vec::with_capacity(steps);
    for i in 0..steps - 1 {
        out.push(low + step * i as f64);
    }
    out.push(high);
    Ok(out)
}
