//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the generator stays free of presentation concerns
//! - output changes are localized

use crate::domain::{ByteRegime, CurveSpec, Preset, Summary};

/// Format the full run summary (curve parameters + headline numbers).
pub fn format_run_summary(preset: Preset, spec: &CurveSpec, summary: &Summary) -> String {
    let mut out = String::new();
    let p = &spec.params;

    out.push_str("=== dip - Diffractive Minimum Predictor ===\n");
    out.push_str(&format!(
        "Preset: {} ({})\n",
        preset.name(),
        summary.shape.display_name()
    ));
    out.push_str(&format!(
        "Grid: n={} | sqrt(s)=[{:.0}, {:.0}] GeV | step={:.3} GeV\n",
        spec.grid.size,
        spec.grid.low,
        spec.grid.high,
        spec.grid.spacing()
    ));
    out.push_str(&format!(
        "Shape: center={:.1} GeV width={:.1} GeV baseline={:.1} pb depth={:.1} pb\n",
        p.center, p.width, p.baseline, p.depth
    ));
    out.push_str(&format!(
        "Zone: [{:.0}, {:.0}] GeV ({} points)\n",
        spec.zone.low, spec.zone.high, summary.zone_points
    ));

    out.push_str("\nResults:\n");
    out.push_str(&format!(
        "- dip center   : {:.0} GeV = {:.3} TeV (value {:.2} pb)\n",
        summary.center_gev,
        summary.center_tev,
        summary.center_value
    ));
    let suppression = if p.baseline != 0.0 {
        (1.0 - summary.min_value / p.baseline) * 100.0
    } else {
        0.0
    };
    out.push_str(&format!(
        "- grid minimum : {:.1} pb at {:.1} GeV ({suppression:.0}% suppression)\n",
        summary.min_value, summary.min_x
    ));
    match (summary.zone_min_x, summary.zone_min_value) {
        (Some(x), Some(v)) => out.push_str(&format!("- zone minimum : {v:.1} pb at {x:.1} GeV\n")),
        _ => out.push_str("- zone minimum : (no grid point in zone)\n"),
    }
    out.push_str(&format!(
        "- probe        : {:.1} pb at {:.1} GeV\n",
        summary.probe_value, summary.probe_x
    ));
    out.push_str(&format!("- regimes      : {}\n", fmt_regimes(summary)));

    out
}

/// Format the list of available presets.
pub fn format_presets() -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<12} {:<22} {:>8} {:>8} {:>9} {:>7}\n",
            "preset", "shape", "center", "width", "baseline", "depth"
        )
        .trim_end(),
    );
    out.push('\n');
    for preset in Preset::ALL {
        let spec = preset.spec();
        out.push_str(
            format!(
                "{:<12} {:<22} {:>8.1} {:>8.1} {:>9.1} {:>7.1}\n",
                preset.name(),
                spec.shape.display_name(),
                spec.params.center,
                spec.params.width,
                spec.params.baseline,
                spec.params.depth,
            )
            .trim_end(),
        );
        out.push('\n');
    }
    out
}

fn fmt_regimes(summary: &Summary) -> String {
    let parts: Vec<String> = ByteRegime::ALL
        .iter()
        .map(|&r| format!("{}={:.1}%", r.code(), summary.regimes.get(r) * 100.0))
        .collect();
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::generate;
    use crate::report::summarize;

    #[test]
    fn run_summary_mentions_key_numbers() {
        let preset = Preset::Lorentzian;
        let spec = preset.spec();
        let ds = generate(&spec).unwrap();
        let summary = summarize(&spec, &ds).unwrap();
        let txt = format_run_summary(preset, &spec, &summary);

        assert!(txt.contains("Preset: lorentzian (Lorentzian dip)"));
        assert!(txt.contains("884 GeV = 0.884 TeV (value 20.00 pb)"));
        assert!(txt.contains("L=0.0% G=100.0% R=0.0%"));
    }

    #[test]
    fn presets_table_lists_every_preset() {
        let txt = format_presets();
        assert_eq!(txt.lines().count(), 1 + Preset::ALL.len());
        assert!(txt.contains("suppression"));
        assert!(txt.contains("Logistic suppression"));
    }
}
