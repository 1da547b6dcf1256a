// src/plot_session.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;
use std::error::Error;

use crate::constants::{FIT_LINE_SAMPLES, ZERO_ORIGIN_RATIO};
use crate::data_analysis::linear_fit::{fit_linear, LinearFit};
use crate::data_input::table::DataTable;
use crate::plot_framework::{Figure, FigureItem};

/// Per-series switches consumed by `draw_series`.
#[derive(Debug, Clone, Default)]
pub struct SeriesOptions {
    pub units: String,
    pub draw_label: bool,
    pub label_x: f64,
    pub label_y: f64,
    pub x_error: bool,
    pub y_error: bool,
}

/// Transient state for one batch of series plots: the parsed table, the
/// column cursor, and the figure the series accumulate on.
///
/// A session is created at the start of a batch call and dropped when
/// the batch completes, so independent batches never share state.
pub struct PlotSession<'a> {
    table: DataTable,
    cursor: usize,
    figure: &'a mut Figure,
}

impl<'a> PlotSession<'a> {
    pub fn new(table: DataTable, figure: &'a mut Figure) -> Self {
        PlotSession {
            table,
            cursor: 0,
            figure,
        }
    }

    /// Position of the next unread column.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn take_column(&mut self) -> Result<Array1<f64>, Box<dyn Error>> {
        let column = self
            .table
            .column(self.cursor)
            .ok_or_else(|| {
                format!(
                    "column {} requested but table has only {} columns",
                    self.cursor,
                    self.table.n_columns()
                )
            })?
            .clone();
        self.cursor += 1;
        Ok(column)
    }

    /// Consumes one series worth of columns (x, y, then any requested
    /// error columns, strictly in that order), fits a line, and draws
    /// scatter, fitted line, error bars, and label onto the shared
    /// figure. Returns the fit for the caller's summary display.
    pub fn draw_series(&mut self, options: &SeriesOptions) -> Result<LinearFit, Box<dyn Error>> {
        let x = self.take_column()?;
        let y = self.take_column()?;
        let x_err = if options.x_error {
            Some(self.take_column()?)
        } else {
            None
        };
        let y_err = if options.y_error {
            Some(self.take_column()?)
        } else {
            None
        };

        let mut x_min = *x.min().map_err(|e| format!("x column extrema: {}", e))?;
        let x_max = *x.max().map_err(|e| format!("x column extrema: {}", e))?;
        let y_min = *y.min().map_err(|e| format!("y column extrema: {}", e))?;
        let y_max = *y.max().map_err(|e| format!("y column extrema: {}", e))?;

        let fit = fit_linear(&x, &y)?;

        // Start the plotted ranges from (0, 0) when neither axis would
        // waste much area doing so. Both axes must qualify; the fit
        // itself is never affected.
        if needs_zero_origin(x_min, x_max) && needs_zero_origin(y_min, y_max) {
            x_min = 0.0;
            self.figure.anchor_origin();
        }

        let points: Vec<(f64, f64)> = x.iter().zip(y.iter()).map(|(&x, &y)| (x, y)).collect();
        self.figure.push(FigureItem::Scatter {
            points: points.clone(),
        });

        let line_points = Array1::linspace(x_min, x_max, FIT_LINE_SAMPLES)
            .iter()
            .map(|&x| (x, fit.predict(x)))
            .collect();
        self.figure.push(FigureItem::FitLine {
            points: line_points,
        });

        if x_err.is_some() || y_err.is_some() {
            self.figure.push(FigureItem::ErrorBars {
                points,
                x_err: x_err.map(|err| err.to_vec()),
                y_err: y_err.map(|err| err.to_vec()),
            });
        }

        if options.draw_label {
            self.figure.push(FigureItem::Label {
                text: format_fit_label(&fit, &options.units),
                rel_x: options.label_x,
                rel_y: options.label_y,
            });
        }

        Ok(fit)
    }
}

/// True when the data's low end is small relative to its high end, so
/// starting the range at zero wastes little plot area.
pub fn needs_zero_origin(low: f64, high: f64) -> bool {
    high > 0.0 && low > 0.0 && low / high < ZERO_ORIGIN_RATIO
}

/// Fit label text: `K = (slope ± stderr) units`, three decimal places.
pub fn format_fit_label(fit: &LinearFit, units: &str) -> String {
    let text = format!("K = ({:.3} ± {:.3})", fit.slope, fit.slope_stderr);
    if units.is_empty() {
        text
    } else {
        format!("{} {}", text, units)
    }
}


// src/plot_session.rs
