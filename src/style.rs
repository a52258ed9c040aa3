//! Fixed look of the evaluation graph.
//!
//! Sizes are expressed in inches and points and converted to pixels at
//! [`DPI`], so the figure keeps its proportions if the resolution changes.

use plotters::style::RGBColor;

pub const BACKGROUND: RGBColor = RGBColor(0x40, 0x40, 0x40);
pub const FIGURE_BACKGROUND: RGBColor = RGBColor(0xff, 0xff, 0xff);
pub const EVALUATION: RGBColor = RGBColor(0xfb, 0x8b, 0x24);
pub const BASELINE: RGBColor = RGBColor(0x80, 0x80, 0x80);
pub const BLACK_FILL: RGBColor = RGBColor(0x00, 0x00, 0x00);
pub const WHITE_FILL: RGBColor = RGBColor(0xff, 0xff, 0xff);
pub const TEXT: RGBColor = RGBColor(0x00, 0x00, 0x00);

/// Figure width contributed by each ply, in inches.
pub const WIDTH_PER_PLY: f64 = 0.2;
/// Narrowest figure, in inches, so short games still fit the axes.
pub const MIN_WIDTH: f64 = 4.0;
/// Figure height, in inches.
pub const HEIGHT: f64 = 5.0;
/// Output resolution in dots per inch.
pub const DPI: f64 = 200.0;
/// Widest raster the renderer will allocate, in pixels.
pub const MAX_WIDTH: u32 = (1 << 16) - 1;

pub const TITLE: &str = "Evaluation Graph";
pub const X_LABEL: &str = "Move Number";
pub const Y_LABEL: &str = "Evaluation";

pub const FONT_FAMILY: &str = "sans-serif";
pub const TITLE_POINTS: f64 = 12.0;
pub const LABEL_POINTS: f64 = 10.0;
pub const LINE_POINTS: f64 = 1.5;

/// Convert a length in points (1/72 inch) to pixels.
pub fn points_to_pixels(points: f64) -> f64 {
    points * DPI / 72.0
}

/// Pixel dimensions of the figure for a game of `plies` plies.
///
/// The width grows linearly at [`WIDTH_PER_PLY`] per ply. The only
/// exception is the [`MIN_WIDTH`] floor for games short enough to fall
/// below it. Callers check the result against [`MAX_WIDTH`].
pub fn figure_size(plies: usize) -> (u32, u32) {
    let width = (WIDTH_PER_PLY * plies as f64).max(MIN_WIDTH);
    ((width * DPI).round() as u32, (HEIGHT * DPI).round() as u32)
}

/// Stroke width in pixels for plotted lines.
pub fn line_width() -> u32 {
    points_to_pixels(LINE_POINTS).round() as u32
}
