//! Evaluation graphs for engine-annotated games.
//!
//!
//! This crate turns a sequence of per-ply evaluations into a PNG chart:
//! a step line of the evaluation over move numbers, with the area below
//! the 50% baseline filled dark and the area above filled light.
//!
//! Evaluations can be handed over directly as [`Evaluations`] or scraped
//! from free-form text containing percentages such as `57.3%` (see
//! [`scrape()`]). The principal type is [`EvalGraph`], which renders to an
//! in-memory PNG; [`generate_graph`] does the whole text-to-image trip.
//!
//! ```no_run
//! let png = eval_graph::generate_graph(b"1. e4 {54.2%} e5 {49.8%}")?;
//! # Ok::<(), eval_graph::GraphError>(())
//! ```

mod error;
mod graph;
mod scrape;
mod series;
pub mod style;
mod types;

/// Renderer and the bytes-in, bytes-out entry point.
pub use graph::{EvalGraph, generate_graph};

/// Error type produced by library operations.
pub use error::GraphError;

/// Text scraping of percentage tokens.
pub use scrape::{MalformedToken, Scrape, parse_evaluations, scrape};

/// Arrays derived from the evaluations for plotting.
pub use series::EvalSeries;

/// Input data structures.
pub use types::{Evaluation, Evaluations};
