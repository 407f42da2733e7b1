use std::fs;
use std::path::{Path, PathBuf};

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::{Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use svg2pdf::usvg;
use svg2pdf::{ConversionOptions, PageOptions};

use crate::cli_main::OutFormat;
use crate::error::{NplotError, Result};
use crate::profile::LengthProfile;

/// Rendering options, decoupled from the CLI so the chart can be driven
/// from tests without parsing arguments.
pub struct PlotConfig {
    pub title: String,
    pub xlabel: String,
    pub log_scale: bool,
    pub n50_line: bool,
    pub dpi: u32,
}

const FIG_WIDTH_IN: f64 = 8.0;
const FIG_HEIGHT_IN: f64 = 5.0;
// Vector backends use the nominal 96 dpi canvas.
const VECTOR_SIZE: (u32, u32) = (768, 480);

const PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),  // dark blue
    RGBColor(174, 199, 232), // light blue
    RGBColor(255, 127, 14),  // bright orange
    RGBColor(255, 187, 120), // light orange
    RGBColor(75, 76, 94),    // dark slate gray
    RGBColor(158, 218, 229), // pale cyan
    RGBColor(127, 128, 171), // slate blue
    RGBColor(199, 199, 199), // light gray
    RGBColor(148, 103, 189), // dark purple
    RGBColor(197, 176, 213), // light purple
];

const N50_GRAY: RGBColor = RGBColor(102, 102, 102);

fn render_err<E: std::fmt::Display>(e: E) -> NplotError {
    NplotError::Render(e.to_string())
}

/// Render the comparison chart for every requested format, returning the
/// paths written. The basename keeps any dots it already contains; each
/// format appends its own extension.
pub fn render(
    profiles: &[LengthProfile],
    cfg: &PlotConfig,
    out_base: &Path,
    format: OutFormat,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if matches!(format, OutFormat::Png | OutFormat::All) {
        let path = PathBuf::from(format!("{}.png", out_base.display()));
        let px = (
            (FIG_WIDTH_IN * cfg.dpi as f64) as u32,
            (FIG_HEIGHT_IN * cfg.dpi as f64) as u32,
        );
        {
            let root = BitMapBackend::new(&path, px).into_drawing_area();
            draw_chart(&root, profiles, cfg)?;
            root.present().map_err(render_err)?;
        }
        written.push(path);
    }

    if matches!(format, OutFormat::Svg | OutFormat::All) {
        let path = PathBuf::from(format!("{}.svg", out_base.display()));
        {
            let root = SVGBackend::new(&path, VECTOR_SIZE).into_drawing_area();
            draw_chart(&root, profiles, cfg)?;
            root.present().map_err(render_err)?;
        }
        written.push(path);
    }

    if matches!(format, OutFormat::Pdf | OutFormat::All) {
        let path = PathBuf::from(format!("{}.pdf", out_base.display()));
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, VECTOR_SIZE).into_drawing_area();
            draw_chart(&root, profiles, cfg)?;
            root.present().map_err(render_err)?;
        }
        fs::write(&path, svg_to_pdf(&svg)?)?;
        written.push(path);
    }

    Ok(written)
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    profiles: &[LengthProfile],
    cfg: &PlotConfig,
) -> Result<()> {
    root.fill(&WHITE).map_err(render_err)?;

    let x_max = profiles
        .iter()
        .filter_map(|p| p.cumulative().last().copied())
        .fold(1.0_f64, f64::max);
    let longest = profiles
        .iter()
        .filter_map(|p| p.lengths().first().copied())
        .max()
        .unwrap_or(1);
    let shortest = profiles
        .iter()
        .filter_map(|p| p.lengths().last().copied())
        .min()
        .unwrap_or(1);
    let y_min = if cfg.log_scale {
        shortest.max(1) as f64
    } else {
        0.0
    };
    let y_max = (longest as f64 * 1.05).max(y_min + 1.0);

    let mut builder = ChartBuilder::on(root);
    builder
        .caption(&cfg.title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60);

    if cfg.log_scale {
        let mut chart = builder
            .build_cartesian_2d(0.0..x_max, (y_min..y_max).log_scale())
            .map_err(render_err)?;
        draw_curves(&mut chart, profiles, cfg)
    } else {
        let mut chart = builder
            .build_cartesian_2d(0.0..x_max, y_min..y_max)
            .map_err(render_err)?;
        draw_curves(&mut chart, profiles, cfg)
    }
}

fn draw_curves<'a, DB, YR>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, YR>>,
    profiles: &[LengthProfile],
    cfg: &PlotConfig,
) -> Result<()>
where
    DB: DrawingBackend + 'a,
    YR: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    chart
        .configure_mesh()
        .x_desc(cfg.xlabel.as_str())
        .y_desc("Length")
        .draw()
        .map_err(render_err)?;

    for (i, profile) in profiles.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        chart
            .draw_series(LineSeries::new(profile.curve(), color.stroke_width(2)))
            .map_err(render_err)?
            .label(profile.name.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
    }

    if cfg.n50_line {
        for profile in profiles {
            let n50 = profile.n_value(0.5)?;
            if n50 == 0 {
                continue;
            }
            chart
                .draw_series(DashedLineSeries::new(
                    [(0.0, n50 as f64), (0.5, n50 as f64)],
                    4,
                    3,
                    N50_GRAY.stroke_width(1),
                ))
                .map_err(render_err)?;
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    Ok(())
}

fn svg_to_pdf(svg: &str) -> Result<Vec<u8>> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|e| NplotError::Render(format!("usvg parse failed: {e}")))?;
    svg2pdf::to_pdf(&tree, ConversionOptions::default(), PageOptions::default())
        .map_err(|e| NplotError::Render(format!("svg2pdf conversion failed: {e}")))
}
