//! Phase/byte regime annotation.
//!
//! Each grid point carries a slowly oscillating phase around `PHI_MID`,
//! quantized to a byte and bucketed into a regime:
//!
//! - `phase(x) = PHI_MID + PHASE_AMPLITUDE * sin(x / center)`
//! - `byte(x) = floor(phase(x) * 255)`
//! - `L` for `byte <= 32`, `G` for `33..=34`, `R` for `byte >= 35`

use crate::domain::{ByteRegime, Dataset, RegimeShares};

/// Midpoint of the forbidden gap `[0.130, 0.135)`.
pub const PHI_MID: f64 = 0.1325;

/// Amplitude of the phase oscillation.
pub const PHASE_AMPLITUDE: f64 = 0.0025;

/// Regime annotation of one grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhasePoint {
    pub phase: f64,
    pub byte: i64,
    pub regime: ByteRegime,
}

/// Annotate coordinate `x` for a dip centered at `center`.
pub fn annotate(x: f64, center: f64) -> PhasePoint {
    let phase = PHI_MID + PHASE_AMPLITUDE * (x / center).sin();
    let byte = (phase * 255.0).floor() as i64;
    PhasePoint {
        phase,
        byte,
        regime: classify(byte),
    }
}

pub fn classify(byte: i64) -> ByteRegime {
    match byte {
        ..=32 => ByteRegime::Low,
        33..=34 => ByteRegime::Gap,
        _ => ByteRegime::High,
    }
}

/// Fraction of grid points in each regime.
pub fn regime_shares(dataset: &Dataset, center: f64) -> RegimeShares {
    if dataset.is_empty() {
        return RegimeShares::default();
    }

    let mut counts = [0usize; 3];
    for r in dataset {
        let slot = match annotate(r.x, center).regime {
            ByteRegime::Low => 0,
            ByteRegime::Gap => 1,
            ByteRegime::High => 2,
        };
        counts[slot] += 1;
    }

    let n = dataset.len() as f64;
    RegimeShares {
        low: counts[0] as f64 / n,
        gap: counts[1] as f64 / n,
        high: counts[2] as f64 / n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::generate;
    use crate::domain::Preset;

    #[test]
    fn classify_boundaries() {
        assert_eq!(classify(32), ByteRegime::Low);
        assert_eq!(classify(33), ByteRegime::Gap);
        assert_eq!(classify(34), ByteRegime::Gap);
        assert_eq!(classify(35), ByteRegime::High);
        assert_eq!(classify(-1), ByteRegime::Low);
    }

    #[test]
    fn annotate_at_zero_is_phi_mid() {
        let p = annotate(0.0, 884.0);
        assert_eq!(p.phase, PHI_MID);
        assert_eq!(p.byte, 33);
        assert_eq!(p.regime, ByteRegime::Gap);
    }

    #[test]
    fn preset_grids_stay_in_the_gap() {
        for preset in Preset::ALL {
            let spec = preset.spec();
            let ds = generate(&spec).unwrap();
            for r in &ds {
                let p = annotate(r.x, spec.params.center);
                assert!(p.byte == 33 || p.byte == 34, "x={} byte={}", r.x, p.byte);
            }
            let shares = regime_shares(&ds, spec.params.center);
            assert_eq!(shares.gap, 1.0);
            assert_eq!(shares.low + shares.high, 0.0);
        }
    }
}
