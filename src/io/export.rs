//! Export the dataset to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.
//! One row per grid point, ascending energy.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::domain::{ByteRegime, CurveRecord, CurveSpec, Dataset};
use crate::error::AppError;
use crate::regime::annotate;

const HEADER: [&str; 7] = [
    "energy_gev",
    "energy_tev",
    "value",
    "in_zone",
    "phase",
    "byte",
    "regime",
];

#[derive(Debug, Serialize)]
struct ExportRow {
    energy_gev: f64,
    energy_tev: f64,
    value: f64,
    in_zone: bool,
    phase: f64,
    byte: i64,
    regime: ByteRegime,
}

impl ExportRow {
    fn new(record: &CurveRecord, center: f64) -> Self {
        let phase = annotate(record.x, center);
        Self {
            energy_gev: record.x,
            energy_tev: record.x / 1000.0,
            value: record.value,
            in_zone: record.in_zone,
            phase: phase.phase,
            byte: phase.byte,
            regime: phase.regime,
        }
    }
}

/// Write every grid point to a CSV file.
pub fn write_dataset_csv(path: &Path, dataset: &Dataset, spec: &CurveSpec) -> Result<(), AppError> {
    let file = create(path)?;
    write_rows(file, dataset.iter(), spec.params.center)?;
    info!("Wrote {} rows to {}", dataset.len(), path.display());
    Ok(())
}

/// Write only the zone points to a CSV file.
///
/// The header is written even when the zone holds no grid point.
pub fn write_zone_csv(path: &Path, dataset: &Dataset, spec: &CurveSpec) -> Result<(), AppError> {
    let file = create(path)?;
    write_rows(file, dataset.zone_records(), spec.params.center)?;
    info!(
        "Wrote {} zone rows to {}",
        dataset.zone_records().count(),
        path.display()
    );
    Ok(())
}

/// Write a header plus one row per record to any writer.
pub fn write_rows<'a, W: Write>(
    writer: W,
    records: impl Iterator<Item = &'a CurveRecord>,
    center: f64,
) -> Result<(), AppError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(HEADER)
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;
    for record in records {
        wtr.serialize(ExportRow::new(record, center))
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }
    wtr.flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}

fn create(path: &Path) -> Result<File, AppError> {
    File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))
}
