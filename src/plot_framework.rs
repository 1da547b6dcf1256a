// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, ErrorBar, Rectangle, Text};
use plotters::series::DashedLineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, IntoFont};

use std::error::Error;
use std::path::PathBuf;

use crate::constants::{
    COLOR_ERROR_BARS, COLOR_FIT_LINE, COLOR_SCATTER, DEFAULT_OUTPUT_FILE, DEFAULT_SAVE_DPI,
    ERROR_BAR_WHISKER_PX, FIGURE_HEIGHT_IN, FIGURE_WIDTH_IN, FIT_LINE_DASH_PX, FIT_LINE_GAP_PX,
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_FIT_LABEL, FONT_SIZE_TICK_LABEL, GRID_COLOR,
    LABEL_BOX_PADDING_PX, LINE_WIDTH_FIT, SCATTER_MARKER_SIZE, SCREEN_DPI,
};

/// One drawable element accumulated on a figure.
#[derive(Debug, Clone)]
pub enum FigureItem {
    /// Raw data points, drawn as filled circular markers.
    Scatter { points: Vec<(f64, f64)> },
    /// Fitted line, drawn dashed across its precomputed domain.
    FitLine { points: Vec<(f64, f64)> },
    /// Error bars; either axis may be absent.
    ErrorBars {
        points: Vec<(f64, f64)>,
        x_err: Option<Vec<f64>>,
        y_err: Option<Vec<f64>>,
    },
    /// Boxed text anchored in axes-relative coordinates.
    Label { text: String, rel_x: f64, rel_y: f64 },
}

/// Retained figure state. Series accumulate on the shared axes until
/// the figure is rendered or cleared.
#[derive(Debug, Clone, Default)]
pub struct Figure {
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub items: Vec<FigureItem>,
    /// Set when the zero-origin heuristic fires; clamps both rendered
    /// range minimums to include the origin.
    pub origin_anchored: bool,
}

impl Figure {
    pub fn new() -> Self {
        Figure::default()
    }

    pub fn push(&mut self, item: FigureItem) {
        self.items.push(item);
    }

    /// Sets the x/y axis text labels.
    pub fn set_axis_labels(&mut self, x_label: Option<&str>, y_label: Option<&str>) {
        self.x_label = x_label.map(str::to_string);
        self.y_label = y_label.map(str::to_string);
    }

    pub fn anchor_origin(&mut self) {
        self.origin_anchored = true;
    }

    /// Removes every accumulated element, label, and anchor, resetting
    /// the figure for a new unrelated plot.
    pub fn clear(&mut self) {
        self.x_label = None;
        self.y_label = None;
        self.items.clear();
        self.origin_anchored = false;
    }

    /// Number of data series drawn so far.
    pub fn series_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, FigureItem::Scatter { .. }))
            .count()
    }
}

/// Options for figure finalize.
#[derive(Debug, Clone)]
pub struct ShowOptions {
    pub output: PathBuf,
    pub dpi: u32,
    pub save: bool,
}

impl Default for ShowOptions {
    fn default() -> Self {
        ShowOptions {
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            dpi: DEFAULT_SAVE_DPI,
            save: false,
        }
    }
}

/// Renders the figure. When `save` is set the bitmap is written to
/// `options.output` at the requested resolution; otherwise the figure
/// is rasterized into an in-memory buffer at screen resolution and
/// discarded, so nothing is persisted unless explicitly asked for.
pub fn show(figure: &Figure, options: &ShowOptions) -> Result<(), Box<dyn Error>> {
    if options.save {
        let (width, height) = figure_dimensions(options.dpi);
        let root = BitMapBackend::new(&options.output, (width, height)).into_drawing_area();
        draw_figure(&root, figure)?;
        root.present()?;
        println!(
            "  Figure saved as '{}' ({} dpi).",
            options.output.display(),
            options.dpi
        );
    } else {
        let (width, height) = figure_dimensions(SCREEN_DPI);
        let mut buffer = vec![0u8; (width * height * 3) as usize];
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw_figure(&root, figure)?;
        root.present()?;
    }
    Ok(())
}

fn figure_dimensions(dpi: u32) -> (u32, u32) {
    (
        (FIGURE_WIDTH_IN * dpi as f64) as u32,
        (FIGURE_HEIGHT_IN * dpi as f64) as u32,
    )
}

/// Calculate plot range with padding.
/// Adds 5% padding, or a fixed padding for degenerate ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let range = (max_val - min_val).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.05 };
    (min_val - padding, max_val + padding)
}

/// Extents of everything drawn on the figure, error bars included.
/// `None` when the figure holds no data-coordinate items.
fn data_bounds(figure: &Figure) -> Option<(f64, f64, f64, f64)> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    let mut fold = |x: f64, y: f64| {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    };

    for item in &figure.items {
        match item {
            FigureItem::Scatter { points } | FigureItem::FitLine { points } => {
                for &(x, y) in points {
                    fold(x, y);
                }
            }
            FigureItem::ErrorBars {
                points,
                x_err,
                y_err,
            } => {
                for (index, &(x, y)) in points.iter().enumerate() {
                    let dx = x_err.as_ref().map_or(0.0, |err| err[index]);
                    let dy = y_err.as_ref().map_or(0.0, |err| err[index]);
                    fold(x - dx, y - dy);
                    fold(x + dx, y + dy);
                }
            }
            FigureItem::Label { .. } => {}
        }
    }

    if !x_min.is_finite() || !y_min.is_finite() {
        return None;
    }
    if figure.origin_anchored {
        x_min = x_min.min(0.0);
        y_min = y_min.min(0.0);
    }
    Some((x_min, x_max, y_min, y_max))
}

fn draw_figure<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    figure: &Figure,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    area.fill(&WHITE)?;

    let (x_min, x_max, y_min, y_max) = data_bounds(figure).unwrap_or((0.0, 1.0, 0.0, 1.0));
    let (x_lo, x_hi) = calculate_range(x_min, x_max);
    let (y_lo, y_hi) = calculate_range(y_min, y_max);

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    let mut mesh = chart.configure_mesh();
    mesh.light_line_style(&GRID_COLOR)
        .bold_line_style(&GRID_COLOR)
        .x_labels(10)
        .y_labels(10)
        .label_style(("sans-serif", FONT_SIZE_TICK_LABEL))
        .axis_desc_style(("sans-serif", FONT_SIZE_AXIS_LABEL));
    if let Some(label) = &figure.x_label {
        mesh.x_desc(label);
    }
    if let Some(label) = &figure.y_label {
        mesh.y_desc(label);
    }
    mesh.draw()?;

    for item in &figure.items {
        match item {
            FigureItem::Scatter { points } => {
                chart.draw_series(points.iter().map(|&(x, y)| {
                    Circle::new((x, y), SCATTER_MARKER_SIZE, COLOR_SCATTER.filled())
                }))?;
            }
            FigureItem::FitLine { points } => {
                chart.draw_series(DashedLineSeries::new(
                    points.iter().cloned(),
                    FIT_LINE_DASH_PX,
                    FIT_LINE_GAP_PX,
                    COLOR_FIT_LINE.stroke_width(LINE_WIDTH_FIT),
                ))?;
            }
            FigureItem::ErrorBars {
                points,
                x_err,
                y_err,
            } => {
                if let Some(errors) = y_err {
                    chart.draw_series(points.iter().zip(errors.iter()).map(|(&(x, y), &e)| {
                        ErrorBar::new_vertical(
                            x,
                            y - e,
                            y,
                            y + e,
                            COLOR_ERROR_BARS.stroke_width(1),
                            ERROR_BAR_WHISKER_PX,
                        )
                    }))?;
                }
                if let Some(errors) = x_err {
                    chart.draw_series(points.iter().zip(errors.iter()).map(|(&(x, y), &e)| {
                        ErrorBar::new_horizontal(
                            y,
                            x - e,
                            x,
                            x + e,
                            COLOR_ERROR_BARS.stroke_width(1),
                            ERROR_BAR_WHISKER_PX,
                        )
                    }))?;
                }
            }
            FigureItem::Label { .. } => {}
        }
    }

    // Labels go on top of everything, positioned in pixel space.
    let (px_range, py_range) = area.get_pixel_range();
    let (width, height) = (px_range.end - px_range.start, py_range.end - py_range.start);
    for item in &figure.items {
        if let FigureItem::Label { text, rel_x, rel_y } = item {
            let anchor_x = px_range.start + (rel_x * width as f64) as i32;
            let anchor_y = py_range.start + ((1.0 - rel_y) * height as f64) as i32;

            // Approximate character width relative to font size
            let estimated_char_width = (FONT_SIZE_FIT_LABEL as f64 * 0.6) as i32;
            let text_width = text.chars().count() as i32 * estimated_char_width;
            let text_height = FONT_SIZE_FIT_LABEL;
            let pad = LABEL_BOX_PADDING_PX;
            let box_coords = [
                (anchor_x - pad, anchor_y - pad),
                (anchor_x + text_width + pad, anchor_y + text_height + pad),
            ];

            area.draw(&Rectangle::new(box_coords, WHITE.filled()))?;
            area.draw(&Rectangle::new(box_coords, BLACK.stroke_width(1)))?;
            area.draw(&Text::new(
                text.as_str(),
                (anchor_x, anchor_y),
                ("sans-serif", FONT_SIZE_FIT_LABEL).into_font().color(&BLACK),
            ))?;
        }
    }

    Ok(())
}


// src/plot_framework.rs
