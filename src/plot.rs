use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::color::SeriesColor;
use crate::data::model::AbundanceTable;
use crate::error::{Result, TotemError};

/// Space left between the outermost bars and the x-axis limits, in percent.
pub const X_PADDING: f64 = 5.0;
/// Bar thickness in row units; bars are centred on their row.
pub const BAR_HEIGHT: f64 = 0.8;

const FONT: &str = "sans-serif";

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Canvas size and series colours.
#[derive(Debug, Clone)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub value1_color: SeriesColor,
    pub value2_color: SeriesColor,
}

impl Default for PlotStyle {
    /// 20 x 15 inches at 100 dpi.
    fn default() -> Self {
        Self {
            width: 2000,
            height: 1500,
            value1_color: SeriesColor::dark_green(),
            value2_color: SeriesColor::light_green(),
        }
    }
}

// ---------------------------------------------------------------------------
// Layout – everything about the chart that does not need a backend
// ---------------------------------------------------------------------------

/// Axis limits and text of a totem chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub title: String,
    pub x_label: String,
    /// Pixel width reserved left of the plot for row labels.
    pub label_area: u32,
    /// Font size of the row labels.
    pub label_font: f64,
}

impl ChartLayout {
    /// Fails with [`TotemError::EmptyResult`] when there is nothing to plot,
    /// and with [`TotemError::NonFiniteLimits`] when a value is `inf`/`nan`
    /// or the axis span overflows.
    pub fn for_table(table: &AbundanceTable, style: &PlotStyle) -> Result<Self> {
        if table.is_empty() {
            return Err(TotemError::EmptyResult);
        }

        let min_value2 = extreme(table.values2(), f64::INFINITY, f64::min);
        let max_value1 = extreme(table.values1(), f64::NEG_INFINITY, f64::max);
        let x_range = (min_value2 - X_PADDING)..(max_value1 + X_PADDING);
        if !(x_range.end - x_range.start).is_finite() {
            return Err(TotemError::NonFiniteLimits {
                min: x_range.start,
                max: x_range.end,
            });
        }

        let n = table.len() as f64;
        let names = &table.headers;

        let longest = table.identifiers().map(|id| id.chars().count()).max().unwrap_or(0);
        let label_font = (f64::from(style.height) * 0.8 / n).clamp(6.0, 14.0);
        let label_area = ((longest as f64 * label_font * 0.6) as u32 + 20).min(style.width / 2);

        Ok(ChartLayout {
            x_range,
            y_range: -1.0..(n + 0.1),
            title: format!("Comparison of {} and {} Taxa", names.value2, names.value1),
            x_label: format!(
                "{}: {}. {}: {}",
                names.value2, style.value2_color.name, names.value1, style.value1_color.name
            ),
            label_area,
            label_font,
        })
    }
}

/// Like `fold(start, pick)`, except a `nan` anywhere makes the result `nan`.
fn extreme(values: impl Iterator<Item = f64>, start: f64, pick: fn(f64, f64) -> f64) -> f64 {
    values.fold(start, |acc, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            pick(acc, v)
        }
    })
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// `<stem>.png`, with the extension appended rather than substituted.
pub fn output_path(stem: &Path) -> PathBuf {
    let mut path = stem.as_os_str().to_owned();
    path.push(".png");
    PathBuf::from(path)
}

/// Draw the mirrored bar chart for `table` and write it to `<stem>.png`.
///
/// Returns the path written. Nothing is created when `table` is empty.
pub fn render(table: &AbundanceTable, stem: &Path, style: &PlotStyle) -> Result<PathBuf> {
    let layout = ChartLayout::for_table(table, style)?;
    let path = output_path(stem);
    let (width, height) = (style.width, style.height);

    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw(&root, table, &layout, style)?;
        root.present().map_err(render_err)?;
    }

    image::save_buffer_with_format(
        &path,
        &buffer,
        width,
        height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )?;
    log::info!("wrote {} bars to {}", table.len(), path.display());
    Ok(path)
}

fn draw(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    table: &AbundanceTable,
    layout: &ChartLayout,
    style: &PlotStyle,
) -> Result<()> {
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&layout.title, (FONT, 28))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(layout.label_area)
        .build_cartesian_2d(layout.x_range.clone(), layout.y_range.clone())
        .map_err(render_err)?;

    // Row labels are drawn separately; the mesh only supplies grid lines.
    chart
        .configure_mesh()
        .x_desc(layout.x_label.as_str())
        .axis_desc_style((FONT, 20))
        .y_labels(table.len() + 2)
        .y_label_formatter(&|_: &f64| String::new())
        .draw()
        .map_err(render_err)?;

    let fill1 = style.value1_color.bar_fill().filled();
    let fill2 = style.value2_color.bar_fill().filled();
    chart
        .draw_series(table.values1().enumerate().map(|(i, v)| bar(i, v, fill1)))
        .map_err(render_err)?;
    chart
        .draw_series(table.values2().enumerate().map(|(i, v)| bar(i, v, fill2)))
        .map_err(render_err)?;

    let label_style = TextStyle::from((FONT, layout.label_font).into_font())
        .pos(Pos::new(HPos::Right, VPos::Center));
    for (i, id) in table.identifiers().enumerate() {
        let (x, y) = chart.backend_coord(&(layout.x_range.start, i as f64));
        root.draw(&Text::new(id.to_string(), (x - 8, y), label_style.clone()))
            .map_err(render_err)?;
    }

    Ok(())
}

fn bar(position: usize, value: f64, style: ShapeStyle) -> Rectangle<(f64, f64)> {
    let y = position as f64;
    Rectangle::new(
        [(0.0, y - BAR_HEIGHT / 2.0), (value, y + BAR_HEIGHT / 2.0)],
        style,
    )
}

fn render_err<E: std::fmt::Display>(err: E) -> TotemError {
    TotemError::Render(err.to_string())
}
