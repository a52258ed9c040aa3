use std::{fmt, ops::Deref};

/// Normalized evaluation of a single ply.
///
/// 0.5 is neutral; values below favour the second player ("black") and
/// values above favour the first ("white").
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Evaluation(pub f64);

impl Evaluation {
    /// Neutral evaluation, the baseline of the graph.
    pub const MIDDLE: Evaluation = Evaluation(0.5);

    /// Build from a percentage such as `57.3`.
    pub fn from_percent(percent: f64) -> Self {
        Self(percent / 100.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether the position is below the midline.
    pub fn is_black(self) -> bool {
        self.0 < Self::MIDDLE.0
    }
}

/// Formats the evaluation the way it is scraped back, e.g. `57.3%`.
impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

/// Ordered sequence of evaluations, one per ply.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Evaluations(Vec<Evaluation>);

impl Evaluations {
    pub fn new(evaluations: Vec<Evaluation>) -> Self {
        Self(evaluations)
    }

    /// Number of plies.
    pub fn plies(&self) -> usize {
        self.0.len()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|e| e.0)
    }
}

impl Deref for Evaluations {
    type Target = [Evaluation];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<f64>> for Evaluations {
    fn from(values: Vec<f64>) -> Self {
        Self(values.into_iter().map(Evaluation).collect())
    }
}

impl FromIterator<Evaluation> for Evaluations {
    fn from_iter<I: IntoIterator<Item = Evaluation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
