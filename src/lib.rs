// src/lib.rs - Library interface

//! Reads two-column (optionally with error bars) numeric data from a
//! delimited text file, fits an ordinary least-squares line to each
//! column pair, and overlays the data, the fitted line, and a formatted
//! slope label on a shared figure that can be saved as a PNG.

pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod plot_framework;
pub mod plot_functions;
pub mod plot_session;

pub use data_analysis::linear_fit::{fit_linear, LinearFit};
pub use data_input::table::DataTable;
pub use data_input::table_parser::parse_table_file;
pub use plot_framework::{show, Figure, FigureItem, ShowOptions};
pub use plot_functions::add_plot::{add_plot, AddPlotOptions};
pub use plot_session::{PlotSession, SeriesOptions};
