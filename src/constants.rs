// src/constants.rs

// Import specific colors needed
use plotters::style::colors::{BLACK, RED};
use plotters::style::RGBColor;

// Figure canvas, 16:9 inches.
pub const FIGURE_WIDTH_IN: f64 = 16.0;
pub const FIGURE_HEIGHT_IN: f64 = 9.0;

// Resolution used when the figure is rasterized for display only.
pub const SCREEN_DPI: u32 = 120;
// Resolution used when saving, unless the caller overrides it.
pub const DEFAULT_SAVE_DPI: u32 = 300;

pub const DEFAULT_INPUT_FILE: &str = "data.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "graph.png";
pub const DEFAULT_DELIMITER: u8 = b',';

// Default axes-relative anchor of the fit label.
pub const DEFAULT_LABEL_X: f64 = 0.05;
pub const DEFAULT_LABEL_Y: f64 = 0.9;

// Both axes must have low/high below this ratio before the plotted
// ranges are re-anchored at the origin.
pub const ZERO_ORIGIN_RATIO: f64 = 0.2;

// Samples used to draw the fitted line across its domain.
pub const FIT_LINE_SAMPLES: usize = 50;

// --- Plot Style Assignments ---
pub const COLOR_SCATTER: &RGBColor = &RED;
pub const SCATTER_MARKER_SIZE: i32 = 7;
pub const COLOR_FIT_LINE: &RGBColor = &BLACK;
pub const FIT_LINE_DASH_PX: i32 = 8;
pub const FIT_LINE_GAP_PX: i32 = 6;
pub const LINE_WIDTH_FIT: u32 = 1;
pub const COLOR_ERROR_BARS: RGBColor = RGBColor(31, 119, 180);
pub const ERROR_BAR_WHISKER_PX: u32 = 6;
pub const GRID_COLOR: RGBColor = RGBColor(229, 229, 229);

// Font sizes
pub const FONT_SIZE_AXIS_LABEL: i32 = 20;
pub const FONT_SIZE_TICK_LABEL: i32 = 14;
pub const FONT_SIZE_FIT_LABEL: i32 = 20;
pub const LABEL_BOX_PADDING_PX: i32 = 10;

// src/constants.rs
