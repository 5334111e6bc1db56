//! Plotters-powered SVG chart of a generated dataset.
//!
//! Layout:
//! - upper panel: the curve (energy in TeV), the zone as a shaded band, the dip
//!   center as a vertical reference line and a marker at the probe energy
//! - lower panel: the same points colored by byte regime
//!
//! All series are computed from the dataset; the render call only draws.

use std::error::Error;
use std::path::Path;

use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::domain::{ByteRegime, CurveSpec, Dataset, PROBE_GEV};
use crate::error::AppError;
use crate::regime::{annotate, regime_shares};

/// Write the chart to an SVG file.
pub fn write_chart_svg(
    path: &Path,
    dataset: &Dataset,
    spec: &CurveSpec,
    size: (u32, u32),
) -> Result<(), AppError> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    draw_chart(&root, dataset, spec)
        .map_err(|e| AppError::new(2, format!("Failed to render chart '{}': {e}", path.display())))?;
    info!("Wrote chart {}", path.display());
    Ok(())
}

/// Render the chart to an in-memory SVG document.
pub fn render_chart_svg(dataset: &Dataset, spec: &CurveSpec, size: (u32, u32)) -> Result<String, AppError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw_chart(&root, dataset, spec)
            .map_err(|e| AppError::new(2, format!("Failed to render chart: {e}")))?;
    }
    Ok(svg)
}

fn draw_chart<DB>(root: &DrawingArea<DB, Shift>, dataset: &Dataset, spec: &CurveSpec) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let (_, height) = root.dim_in_pixel();
    let (upper, lower) = root.split_vertically(height * 3 / 4);

    let x0 = to_tev(spec.grid.low);
    let x1 = to_tev(spec.grid.high);
    let (y0, y1) = value_bounds(dataset, spec.params.baseline);
    let center = spec.params.center;

    let mut chart = ChartBuilder::on(&upper)
        .caption(
            format!("Diffractive dip prediction (sqrt(s) = {center:.0} GeV)"),
            ("sans-serif", 24).into_font(),
        )
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .x_desc("sqrt(s) [TeV]")
        .y_desc("dσ/dt [pb/GeV²]")
        .draw()?;

    // 1) Zone band, drawn first so the curve stays on top.
    let band = YELLOW.mix(0.3);
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(to_tev(spec.zone.low), y0), (to_tev(spec.zone.high), y1)],
            band.filled(),
        )))?
        .label(format!(
            "Zone [{:.2}-{:.2} TeV]",
            to_tev(spec.zone.low),
            to_tev(spec.zone.high)
        ))
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], band.filled()));

    // 2) The curve.
    chart
        .draw_series(LineSeries::new(
            dataset.iter().map(|r| (to_tev(r.x), r.value)),
            RED.stroke_width(3),
        ))?
        .label(spec.shape.display_name())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(3)));

    // 3) Center reference line.
    chart
        .draw_series(LineSeries::new(
            vec![(to_tev(center), y0), (to_tev(center), y1)],
            BLACK.stroke_width(2),
        ))?
        .label(format!("Center: {center:.0} GeV"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(2)));

    // 4) Probe marker.
    if let Some(probe) = dataset.nearest(PROBE_GEV) {
        chart
            .draw_series(std::iter::once(Circle::new(
                (to_tev(probe.x), probe.value),
                6,
                BLUE.filled(),
            )))?
            .label(format!("Probe: {:.1} TeV", to_tev(PROBE_GEV)))
            .legend(|(x, y)| Circle::new((x + 10, y), 4, BLUE.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    // Lower panel: regime scatter.
    let mut regimes = ChartBuilder::on(&lower)
        .caption("Byte regimes", ("sans-serif", 18).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    regimes
        .configure_mesh()
        .x_desc("sqrt(s) [TeV]")
        .y_desc("xsec [pb]")
        .draw()?;

    let shares = regime_shares(dataset, center);
    for regime in ByteRegime::ALL {
        let points: Vec<(f64, f64)> = dataset
            .iter()
            .filter(|r| annotate(r.x, center).regime == regime)
            .map(|r| (to_tev(r.x), r.value))
            .collect();
        if points.is_empty() {
            continue;
        }

        let color = regime_color(regime);
        regimes
            .draw_series(points.into_iter().map(|p| Circle::new(p, 2, color.filled())))?
            .label(format!("{}: {:.1}%", regime.code(), shares.get(regime) * 100.0))
            .legend(move |(x, y)| Circle::new((x + 10, y), 3, color.filled()));
    }

    regimes
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn to_tev(gev: f64) -> f64 {
    gev / 1000.0
}

/// Y bounds from zero (or the lowest value) up to 10% above the baseline.
fn value_bounds(dataset: &Dataset, baseline: f64) -> (f64, f64) {
    let lo = dataset.iter().map(|r| r.value).fold(0.0, f64::min);
    let hi = dataset.iter().map(|r| r.value).fold(baseline, f64::max);
    let hi = lo + (hi - lo) * 1.1;
    if hi > lo { (lo, hi) } else { (lo, lo + 1.0) }
}

fn regime_color(regime: ByteRegime) -> RGBColor {
    match regime {
        ByteRegime::Low => GREEN,
        ByteRegime::Gap => RED,
        ByteRegime::High => BLUE,
    }
}
