//! Error types for the evaluation graph renderer.
//!
//! This crate uses `thiserror` to provide a single enumeration of the
//! errors that may occur while turning an evaluation sequence into an
//! image. The variants wrap underlying errors from the plotting backend,
//! the PNG encoder, and stream I/O.

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    /// The evaluation sequence is empty, so there is nothing to plot.
    #[error("no evaluations found in input")]
    NoEvaluations,

    /// The figure for this many plies would exceed the widest supported
    /// raster image.
    #[error("graph would be {width} px wide, more than the {max} px limit")]
    TooLarge { width: u32, max: u32 },

    /// Wraps an error raised by the `plotters` drawing area, including
    /// font lookup failures while laying out labels.
    #[error("Drawing error: {0}")]
    Drawing(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The rendered canvas could not be encoded as PNG.
    #[error("Encoding error: {0}")]
    Encode(#[from] image::ImageError),

    /// Reading the input or writing the image failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl<E> From<DrawingAreaErrorKind<E>> for GraphError
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self::Drawing(Box::new(err))
    }
}
