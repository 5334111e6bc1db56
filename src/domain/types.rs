//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during generation
//! - exported to JSON/CSV
//! - reloaded later for plotting

use std::path::PathBuf;

use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Dip center used by both presets (GeV).
pub const LHC_ANOMALY_GEV: f64 = 884.0;

/// Baseline cross-section away from the dip (pb).
pub const XSEC_BASELINE_PB: f64 = 100.0;

/// Energy probe highlighted on the chart and in the summary (GeV).
pub const PROBE_GEV: f64 = 900.0;

/// Which closed form produces the dip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DipShape {
    /// `baseline - depth / (1 + ((x - center) / width)^2)`
    Lorentzian,
    /// `baseline / (1 + exp(-|x - center| / width))`
    Logistic,
}

impl DipShape {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            DipShape::Lorentzian => "Lorentzian dip",
            DipShape::Logistic => "Logistic suppression",
        }
    }
}

/// Named, fixed parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Lorentzian dip at 884 GeV, ±34 GeV half-width, 80 pb deep.
    Lorentzian,
    /// Logistic suppression centered at 884 GeV with a 50 GeV recovery scale.
    Suppression,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Lorentzian, Preset::Suppression];

    /// Stable name used for file stems and the run file.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Lorentzian => "lorentzian",
            Preset::Suppression => "suppression",
        }
    }

    pub fn spec(self) -> CurveSpec {
        let grid = GridSpec {
            low: 200.0,
            high: 14_000.0,
            size: 1000,
        };
        let zone = ZoneBounds {
            low: 800.0,
            high: 1000.0,
        };
        match self {
            Preset::Lorentzian => CurveSpec {
                grid,
                shape: DipShape::Lorentzian,
                params: DipParams {
                    center: LHC_ANOMALY_GEV,
                    width: 34.0,
                    baseline: XSEC_BASELINE_PB,
                    depth: 80.0,
                },
                zone,
            },
            Preset::Suppression => CurveSpec {
                grid,
                shape: DipShape::Logistic,
                params: DipParams {
                    center: LHC_ANOMALY_GEV,
                    width: 50.0,
                    baseline: XSEC_BASELINE_PB,
                    depth: 80.0,
                },
                zone,
            },
        }
    }
}

/// Evenly spaced sample grid over `[low, high]` (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub low: f64,
    pub high: f64,
    pub size: usize,
}

impl GridSpec {
    /// Distance between neighbouring grid points.
    pub fn spacing(&self) -> f64 {
        (self.high - self.low) / (self.size as f64 - 1.0)
    }
}

/// Shape parameters shared by both closed forms.
///
/// `depth` is only used by the Lorentzian form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DipParams {
    pub center: f64,
    pub width: f64,
    pub baseline: f64,
    pub depth: f64,
}

/// Closed sub-interval flagged in the output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneBounds {
    pub low: f64,
    pub high: f64,
}

impl ZoneBounds {
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }
}

/// Everything the generator needs for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSpec {
    pub grid: GridSpec,
    pub shape: DipShape,
    pub params: DipParams,
    pub zone: ZoneBounds,
}

/// One evaluated grid point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveRecord {
    pub x: f64,
    pub value: f64,
    pub in_zone: bool,
}

/// The ordered, read-only output of a single generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<CurveRecord>,
}

impl Dataset {
    pub(crate) fn from_records(records: Vec<CurveRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CurveRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurveRecord> {
        self.records.iter()
    }

    /// Records flagged as inside the zone, in grid order.
    pub fn zone_records(&self) -> impl Iterator<Item = &CurveRecord> {
        self.records.iter().filter(|r| r.in_zone)
    }

    /// Grid point closest to `x` (first one wins on ties).
    pub fn nearest(&self, x: f64) -> Option<&CurveRecord> {
        self.records.iter().min_by(|a, b| {
            (a.x - x)
                .abs()
                .partial_cmp(&(b.x - x).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Grid point with the smallest value (first one wins on ties).
    pub fn min_record(&self) -> Option<&CurveRecord> {
        min_by_value(self.records.iter())
    }

    /// Smallest value inside the zone, if the zone holds any grid point.
    pub fn zone_min_record(&self) -> Option<&CurveRecord> {
        min_by_value(self.zone_records())
    }

    /// `(x, value)` pairs, handy for plotting.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.records.iter().map(|r| (r.x, r.value)).collect()
    }
}

fn min_by_value<'a>(records: impl Iterator<Item = &'a CurveRecord>) -> Option<&'a CurveRecord> {
    records.min_by(|a, b| {
        a.value
            .partial_cmp(&b.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CurveRecord;
    type IntoIter = std::slice::Iter<'a, CurveRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Phase/byte regime of a grid point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ByteRegime {
    /// `byte <= 32`
    #[serde(rename = "L")]
    Low,
    /// `byte` in `33..=34`
    #[serde(rename = "G")]
    Gap,
    /// `byte >= 35`
    #[serde(rename = "R")]
    High,
}

impl ByteRegime {
    pub const ALL: [ByteRegime; 3] = [ByteRegime::Low, ByteRegime::Gap, ByteRegime::High];

    /// One-letter code used in exports and legends.
    pub fn code(self) -> &'static str {
        match self {
            ByteRegime::Low => "L",
            ByteRegime::Gap => "G",
            ByteRegime::High => "R",
        }
    }
}

/// Fraction of grid points in each regime.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RegimeShares {
    pub low: f64,
    pub gap: f64,
    pub high: f64,
}

impl RegimeShares {
    pub fn get(&self, regime: ByteRegime) -> f64 {
        match regime {
            ByteRegime::Low => self.low,
            ByteRegime::Gap => self.gap,
            ByteRegime::High => self.high,
        }
    }
}

/// Headline numbers of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub shape: DipShape,
    pub center_gev: f64,
    pub center_tev: f64,
    pub center_value: f64,
    pub min_x: f64,
    pub min_value: f64,
    pub zone_min_x: Option<f64>,
    pub zone_min_value: Option<f64>,
    pub zone_points: usize,
    pub probe_x: f64,
    pub probe_value: f64,
    pub regimes: RegimeShares,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub preset: Preset,
    pub out_dir: PathBuf,
    pub export: bool,
    pub chart: bool,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    pub chart_width: u32,
    pub chart_height: u32,
}

/// A saved run file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunFile {
    pub tool: String,
    pub generated_at: DateTime<Local>,
    pub preset: Preset,
    pub spec: CurveSpec,
    pub summary: Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_is_closed_interval() {
        let zone = ZoneBounds {
            low: 800.0,
            high: 1000.0,
        };
        assert!(zone.contains(800.0));
        assert!(zone.contains(1000.0));
        assert!(!zone.contains(799.999));
        assert!(!zone.contains(1000.001));
    }

    #[test]
    fn presets_share_center_and_zone() {
        let a = Preset::Lorentzian.spec();
        let b = Preset::Suppression.spec();
        assert_eq!(a.params.center, LHC_ANOMALY_GEV);
        assert_eq!(b.params.center, LHC_ANOMALY_GEV);
        assert_eq!(a.zone, b.zone);
        assert_eq!(a.shape, DipShape::Lorentzian);
        assert_eq!(b.shape, DipShape::Logistic);
        assert_ne!(a.params.width, b.params.width);
    }

    #[test]
    fn dataset_lookups() {
        let ds = Dataset::from_records(vec![
            CurveRecord { x: 1.0, value: 5.0, in_zone: false },
            CurveRecord { x: 2.0, value: 3.0, in_zone: true },
            CurveRecord { x: 3.0, value: 4.0, in_zone: true },
            CurveRecord { x: 4.0, value: 1.0, in_zone: false },
        ]);
        assert_eq!(ds.nearest(2.4).map(|r| r.x), Some(2.0));
        assert_eq!(ds.min_record().map(|r| r.x), Some(4.0));
        assert_eq!(ds.zone_min_record().map(|r| r.x), Some(2.0));
        assert_eq!(ds.zone_records().count(), 2);
    }
}
