// src/plot_functions/add_plot.rs

use std::error::Error;
use std::path::PathBuf;

use crate::constants::{DEFAULT_DELIMITER, DEFAULT_INPUT_FILE, DEFAULT_LABEL_X, DEFAULT_LABEL_Y};
use crate::data_input::table_parser::parse_table_file;
use crate::plot_framework::Figure;
use crate::plot_session::{PlotSession, SeriesOptions};

/// Parameters recognized by the batch drawing entry point.
#[derive(Debug, Clone)]
pub struct AddPlotOptions {
    /// Delimited numeric input file, no header row.
    pub input: PathBuf,
    pub delimiter: u8,
    /// Unit string appended to the fit-label text.
    pub units: String,
    pub draw_label: bool,
    /// Axes-relative label anchor.
    pub label_x: f64,
    pub label_y: f64,
    /// Whether the table carries an x-error / y-error column per series.
    pub x_error: bool,
    pub y_error: bool,
    /// Number of series to draw from the one file.
    pub series_count: usize,
}

impl Default for AddPlotOptions {
    fn default() -> Self {
        AddPlotOptions {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            delimiter: DEFAULT_DELIMITER,
            units: String::new(),
            draw_label: false,
            label_x: DEFAULT_LABEL_X,
            label_y: DEFAULT_LABEL_Y,
            x_error: false,
            y_error: false,
            series_count: 1,
        }
    }
}

/// Reads the input table once and draws `series_count` series onto the
/// shared figure, consuming columns strictly left to right. Each series
/// gets a scatter plot, a dashed fitted line, optional error bars, and
/// an optional boxed fit label; a fit summary is printed per series.
///
/// Fails fast: an unreadable or malformed file, or a table too narrow
/// for the requested series and error flags, aborts before any drawing.
pub fn add_plot(figure: &mut Figure, options: &AddPlotOptions) -> Result<(), Box<dyn Error>> {
    if options.series_count == 0 {
        return Err("series_count must be at least 1".into());
    }

    let table = parse_table_file(&options.input, options.delimiter)?;

    let columns_per_series = 2 + options.x_error as usize + options.y_error as usize;
    let columns_required = columns_per_series * options.series_count;
    if table.n_columns() < columns_required {
        return Err(format!(
            "table has {} columns but {} series with the requested error columns need {}",
            table.n_columns(),
            options.series_count,
            columns_required
        )
        .into());
    }

    let series_options = SeriesOptions {
        units: options.units.clone(),
        draw_label: options.draw_label,
        label_x: options.label_x,
        label_y: options.label_y,
        x_error: options.x_error,
        y_error: options.y_error,
    };

    let mut session = PlotSession::new(table, figure);
    for series_index in 0..options.series_count {
        let fit = session.draw_series(&series_options)?;
        println!("Series {} fit:", series_index + 1);
        print!("{}", fit.summary_table());
    }
    // The batch owns the session; dropping it here guarantees the next
    // call starts from a fresh cursor.
    drop(session);

    Ok(())
}

// src/plot_functions/add_plot.rs
