//! Read/write run JSON files.
//!
//! A run file is the "portable" record of a run:
//! - preset name and the full curve spec
//! - the run summary
//! - a generation timestamp
//!
//! The dataset itself is not stored; it is regenerated from `spec` on load,
//! which is exact because generation is deterministic.

use std::fs::File;
use std::path::Path;

use chrono::Local;
use log::info;

use crate::domain::{CurveSpec, Preset, RunFile, Summary};
use crate::error::AppError;

/// Write a run JSON file.
pub fn write_run_json(
    path: &Path,
    preset: Preset,
    spec: &CurveSpec,
    summary: &Summary,
) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create run JSON '{}': {e}", path.display())))?;

    let run = RunFile {
        tool: "dip".to_string(),
        generated_at: Local::now(),
        preset,
        spec: *spec,
        summary: summary.clone(),
    };

    serde_json::to_writer_pretty(file, &run)
        .map_err(|e| AppError::new(2, format!("Failed to write run JSON: {e}")))?;
    info!("Wrote run file {}", path.display());

    Ok(())
}

/// Read a run JSON file.
pub fn read_run_json(path: &Path) -> Result<RunFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open run JSON '{}': {e}", path.display())))?;
    let run: RunFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid run JSON: {e}")))?;
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::generate;
    use crate::report::summarize;

    #[test]
    fn run_file_round_trip_regenerates_dataset() {
        let preset = Preset::Lorentzian;
        let spec = preset.spec();
        let ds = generate(&spec).unwrap();
        let summary = summarize(&spec, &ds).unwrap();

        let path = std::env::temp_dir().join(format!("dip-run-{}.json", std::process::id()));
        write_run_json(&path, preset, &spec, &summary).unwrap();
        let run = read_run_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(run.tool, "dip");
        assert_eq!(run.preset, preset);
        assert_eq!(run.spec, spec);
        assert_eq!(run.summary.zone_points, summary.zone_points);
        assert_eq!(generate(&run.spec).unwrap(), ds);
    }

    #[test]
    fn missing_run_file_is_an_error() {
        let err = read_run_json(Path::new("/nonexistent/dip-run.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
