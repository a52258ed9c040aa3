use std::ops::Range;

use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};
use plotters::{
    coord::{
        ranged1d::{DefaultFormatting, KeyPointHint},
        types::RangedCoordf64,
    },
    prelude::*,
};
use tracing::{debug, warn};

use crate::{
    error::GraphError,
    scrape::scrape,
    series::EvalSeries,
    style::{
        BACKGROUND, BASELINE, BLACK_FILL, EVALUATION, FIGURE_BACKGROUND, FONT_FAMILY,
        LABEL_POINTS, MAX_WIDTH, TEXT, TITLE, TITLE_POINTS, WHITE_FILL, X_LABEL, Y_LABEL,
        figure_size, line_width, points_to_pixels,
    },
    types::Evaluations,
};

/// Ticks on the evaluation axis, every 20%.
const Y_TICKS: [f64; 6] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];

/// Linear `f64` axis with fixed tick positions.
///
/// Keeps the default value formatting so the mesh accepts custom label
/// formatters.
struct TickedAxis {
    inner: RangedCoordf64,
    ticks: Vec<f64>,
}

impl TickedAxis {
    fn new(range: Range<f64>, ticks: Vec<f64>) -> Self {
        Self {
            inner: range.into(),
            ticks,
        }
    }
}

impl Ranged for TickedAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.inner.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.weight().allow_light_points() {
            Vec::new()
        } else {
            self.ticks.clone()
        }
    }

    fn range(&self) -> Range<f64> {
        self.inner.range()
    }
}

/// A rendered-on-demand evaluation graph.
///
/// The canvas is created, drawn and encoded inside [`EvalGraph::render`];
/// nothing is shared between calls, so rendering the same evaluations
/// twice yields the same bytes.
pub struct EvalGraph {
    series: EvalSeries,
}

impl EvalGraph {
    /// Prepare a graph for the given evaluations.
    ///
    /// An empty sequence is rejected with [`GraphError::NoEvaluations`]
    /// since it has no axis range to draw. Games whose figure would be
    /// wider than [`MAX_WIDTH`] pixels are rejected with
    /// [`GraphError::TooLarge`] before any canvas is allocated.
    pub fn new(evaluations: &Evaluations) -> Result<Self, GraphError> {
        if evaluations.is_empty() {
            return Err(GraphError::NoEvaluations);
        }
        let (width, _) = figure_size(evaluations.plies());
        if width > MAX_WIDTH {
            return Err(GraphError::TooLarge {
                width,
                max: MAX_WIDTH,
            });
        }
        Ok(Self {
            series: EvalSeries::new(evaluations),
        })
    }

    /// Scrape evaluations out of free-form text, see [`crate::scrape()`].
    pub fn from_text(text: &str) -> Result<Self, GraphError> {
        let scrape = scrape(text);
        for token in &scrape.malformed {
            warn!(
                token = %token.text,
                offset = token.offset,
                "skipping percentage without exactly one decimal"
            );
        }
        debug!(plies = scrape.evaluations.plies(), "scraped evaluations");
        Self::new(&scrape.evaluations)
    }

    pub fn series(&self) -> &EvalSeries {
        &self.series
    }

    /// Pixel size of the rendered image.
    pub fn size(&self) -> (u32, u32) {
        figure_size(self.series.plies())
    }

    /// Render to PNG bytes.
    pub fn render(&self) -> Result<Vec<u8>, GraphError> {
        let (width, height) = self.size();
        debug!(width, height, plies = self.series.plies(), "rendering graph");

        let mut canvas = vec![0u8; width as usize * height as usize * 3];
        self.draw(&mut canvas, (width, height))?;

        let mut png = Vec::new();
        PngEncoder::new(&mut png).write_image(&canvas, width, height, ExtendedColorType::Rgb8)?;
        Ok(png)
    }

    fn draw(&self, canvas: &mut [u8], size: (u32, u32)) -> Result<(), GraphError> {
        let series = &self.series;
        let title_px = points_to_pixels(TITLE_POINTS);
        let label_px = points_to_pixels(LABEL_POINTS);
        let stroke = line_width();

        let (x_lo, mut x_hi) = series.x_bounds();
        // A single ply has no horizontal extent.
        if x_hi <= x_lo {
            x_hi = x_lo + 0.5;
        }
        let (y_lo, y_hi) = series.y_bounds();
        let clip = |y: f64| y.clamp(y_lo, y_hi);

        let root = BitMapBackend::with_buffer(canvas, size).into_drawing_area();
        root.fill(&FIGURE_BACKGROUND)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(TITLE, (FONT_FAMILY, title_px, &TEXT))
            .margin(label_px)
            .x_label_area_size(label_px * 3.0)
            .y_label_area_size(label_px * 4.5)
            .build_cartesian_2d(
                TickedAxis::new(x_lo..x_hi, series.x_ticks()),
                TickedAxis::new(y_lo..y_hi, Y_TICKS.to_vec()),
            )?;

        chart.plotting_area().fill(&BACKGROUND)?;
        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(X_LABEL)
            .y_desc(Y_LABEL)
            .x_label_formatter(&|x| format!("{x:.0}"))
            .y_label_formatter(&|y| format!("{:.0}%", y * 100.0))
            .label_style((FONT_FAMILY, label_px, &TEXT))
            .axis_desc_style((FONT_FAMILY, label_px, &TEXT))
            .draw()?;

        // Fills go under the lines.
        chart.draw_series(series.black_segments().into_iter().map(|i| {
            Rectangle::new(
                [
                    (series.x[i], clip(series.b_evals[i])),
                    (series.x[i + 1], series.middle[i]),
                ],
                BLACK_FILL.filled(),
            )
        }))?;
        chart.draw_series(series.white_segments().into_iter().map(|i| {
            Rectangle::new(
                [
                    (series.x[i], series.middle[i]),
                    (series.x[i + 1], clip(series.w_evals[i])),
                ],
                WHITE_FILL.filled(),
            )
        }))?;

        let last = series.plies() - 1;
        chart.draw_series(LineSeries::new(
            [
                (series.x[0], series.middle[0]),
                (series.x[last], series.middle[last]),
            ],
            BASELINE.stroke_width(stroke),
        ))?;
        chart.draw_series(LineSeries::new(
            series.step_points().into_iter().map(|(x, y)| (x, clip(y))),
            EVALUATION.stroke_width(stroke),
        ))?;

        root.present()?;
        Ok(())
    }
}

/// Render the evaluation graph for a raw input buffer, returning PNG bytes.
///
/// The input is scanned as text; invalid UTF-8 sequences are replaced
/// rather than rejected.
pub fn generate_graph(input: &[u8]) -> Result<Vec<u8>, GraphError> {
    let text = String::from_utf8_lossy(input);
    EvalGraph::from_text(&text)?.render()
}
