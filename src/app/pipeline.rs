//! Shared "generate pipeline" logic used by the `generate` and `plot` commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! curve spec -> dataset -> summary
//!
//! The commands can then focus on presentation and file output.

use log::{info, warn};

use crate::curve::generate;
use crate::domain::{CurveSpec, Dataset, Preset, Summary};
use crate::error::AppError;
use crate::report::summarize;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub preset: Preset,
    pub spec: CurveSpec,
    pub dataset: Dataset,
    pub summary: Summary,
}

/// Execute the pipeline for a preset.
pub fn run_preset(preset: Preset) -> Result<RunOutput, AppError> {
    run_spec(preset, preset.spec())
}

/// Execute the pipeline for an explicit spec (e.g. reloaded from a run file).
pub fn run_spec(preset: Preset, spec: CurveSpec) -> Result<RunOutput, AppError> {
    // 1) Evaluate the curve.
    let dataset = generate(&spec)?;
    info!(
        "Generated {} points for preset '{}' ({})",
        dataset.len(),
        preset.name(),
        spec.shape.display_name()
    );

    // 2) Summarize.
    let summary = summarize(&spec, &dataset)?;
    if summary.zone_points == 0 {
        warn!(
            "Zone [{}, {}] contains no grid point",
            spec.zone.low, spec.zone.high
        );
    }

    Ok(RunOutput {
        preset,
        spec,
        dataset,
        summary,
    })
}
