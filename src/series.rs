use ndarray::{Array1, ArrayView1, Axis, Zip, concatenate, s};

use crate::types::{Evaluation, Evaluations};

/// Arrays derived from an evaluation sequence, ready for plotting.
///
/// All arrays have one entry per ply:
///
/// - `x` is the move-number coordinate `1 + i/2`, two plies per move.
/// - `middle` is the constant 0.5 baseline.
/// - `b_evals` / `w_evals` are the evaluations clipped from above /
///   below at 0.5; the area between them and the baseline is filled.
/// - `black` / `white` decide which unit intervals get filled. A ply is
///   marked when it, or the ply before it (wrapping around), lies on
///   that side of the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalSeries {
    pub evals: Array1<f64>,
    pub x: Array1<f64>,
    pub middle: Array1<f64>,
    pub b_evals: Array1<f64>,
    pub w_evals: Array1<f64>,
    pub black: Array1<bool>,
    pub white: Array1<bool>,
}

impl EvalSeries {
    pub fn new(evaluations: &Evaluations) -> Self {
        let evals: Array1<f64> = evaluations.values().collect();
        let plies = evals.len();
        let mid = Evaluation::MIDDLE.value();

        let x = Array1::from_iter((0..plies).map(|i| 1.0 + i as f64 / 2.0));
        let middle = Array1::from_elem(plies, mid);
        let b_evals = evals.mapv(|e| e.min(mid));
        let w_evals = evals.mapv(|e| e.max(mid));

        let less: Array1<bool> = evaluations.iter().map(|e| e.is_black()).collect();
        let not_less = less.mapv(|l| !l);
        let black = or(&less, &roll(less.view()));
        let white = or(&not_less, &roll(not_less.view()));

        Self {
            evals,
            x,
            middle,
            b_evals,
            w_evals,
            black,
            white,
        }
    }

    pub fn plies(&self) -> usize {
        self.evals.len()
    }

    /// Horizontal axis bounds: first ply to last ply.
    pub fn x_bounds(&self) -> (f64, f64) {
        (1.0, (self.plies() as f64 + 1.0) / 2.0)
    }

    pub fn y_bounds(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    /// Tick positions on every other ply, i.e. whole move numbers.
    pub fn x_ticks(&self) -> Vec<f64> {
        self.x.slice(s![..;2]).to_vec()
    }

    /// Vertices of the step-post polyline through the raw evaluations:
    /// each value holds until the next ply, then jumps.
    pub fn step_points(&self) -> Vec<(f64, f64)> {
        let mut points = Vec::with_capacity(self.plies() * 2);
        for i in 0..self.plies() {
            points.push((self.x[i], self.evals[i]));
            if i + 1 < self.plies() {
                points.push((self.x[i + 1], self.evals[i]));
            }
        }
        points
    }

    /// Unit intervals `[x[i], x[i + 1]]` filled below the baseline.
    pub fn black_segments(&self) -> Vec<usize> {
        filled_segments(self.black.view())
    }

    /// Unit intervals `[x[i], x[i + 1]]` filled above the baseline.
    pub fn white_segments(&self) -> Vec<usize> {
        filled_segments(self.white.view())
    }
}

/// Rotate by one position, moving the last element to the front.
fn roll(mask: ArrayView1<bool>) -> Array1<bool> {
    if mask.is_empty() {
        return mask.to_owned();
    }
    concatenate![Axis(0), mask.slice(s![-1..]), mask.slice(s![..-1])]
}

fn or(a: &Array1<bool>, b: &Array1<bool>) -> Array1<bool> {
    Zip::from(a).and(b).map_collect(|&a, &b| a || b)
}

/// A stepped fill covers the interval after ply `i` only when the mask
/// holds at both of its ends.
fn filled_segments(mask: ArrayView1<bool>) -> Vec<usize> {
    mask.windows(2)
        .into_iter()
        .enumerate()
        .filter(|(_, w)| w[0] && w[1])
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn series(values: &[f64]) -> EvalSeries {
        EvalSeries::new(&Evaluations::from(values.to_vec()))
    }

    #[test]
    fn three_ply_scenario() {
        let s = series(&[0.573, 0.420, 0.715]);
        assert_eq!(s.x, array![1.0, 1.5, 2.0]);
        assert_eq!(s.middle, array![0.5, 0.5, 0.5]);
        assert_eq!(s.b_evals, array![0.5, 0.420, 0.5]);
        assert_eq!(s.w_evals, array![0.573, 0.5, 0.715]);
        // less = [F, T, F], rolled = [F, F, T]
        assert_eq!(s.black, array![false, true, true]);
        assert_eq!(s.white, array![true, true, true]);
        assert_eq!(s.x_bounds(), (1.0, 2.0));
        assert_eq!(s.x_ticks(), vec![1.0, 2.0]);
    }

    #[test]
    fn clipping_brackets_the_baseline() {
        let s = series(&[0.0, 0.25, 0.5, 0.75, 1.0, 1.5]);
        for i in 0..s.plies() {
            assert_eq!(s.b_evals[i], s.evals[i].min(0.5));
            assert_eq!(s.w_evals[i], s.evals[i].max(0.5));
            assert!(s.b_evals[i] <= 0.5 && 0.5 <= s.w_evals[i]);
        }
    }

    #[test]
    fn masks_use_wrapped_predecessor() {
        let e = [0.3, 0.6, 0.6, 0.2, 0.5];
        let s = series(&e);
        let n = e.len();
        for i in 0..n {
            let prev = e[(i + n - 1) % n];
            assert_eq!(s.black[i], e[i] < 0.5 || prev < 0.5, "black[{i}]");
            assert_eq!(s.white[i], e[i] >= 0.5 || prev >= 0.5, "white[{i}]");
            assert!(s.black[i] || s.white[i]);
        }
        // The last ply wraps onto the first.
        assert!(s.black[0]);
        assert!(s.white[0]);
    }

    #[test]
    fn x_is_strictly_increasing() {
        let s = series(&[0.5; 7]);
        for (i, w) in s.x.windows(2).into_iter().enumerate() {
            assert!(w[1] > w[0]);
            assert_eq!(w[0], 1.0 + i as f64 / 2.0);
        }
        assert_eq!(s.x_bounds(), (1.0, 4.0));
        assert_eq!(s.x_ticks(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn single_ply_has_no_segments() {
        let s = series(&[0.3]);
        assert_eq!(s.black, array![true]);
        assert_eq!(s.white, array![false]);
        assert!(s.black_segments().is_empty());
        assert_eq!(s.step_points(), vec![(1.0, 0.3)]);
        assert_eq!(s.x_bounds(), (1.0, 1.0));
    }

    #[test]
    fn empty_sequence_gives_empty_arrays() {
        let s = series(&[]);
        assert_eq!(s.plies(), 0);
        assert!(s.black.is_empty() && s.white.is_empty());
        assert!(s.step_points().is_empty());
        assert!(s.x_ticks().is_empty());
        assert!(s.black_segments().is_empty());
    }

    #[test]
    fn segments_follow_step_post_fill() {
        let s = series(&[0.6, 0.4, 0.4, 0.7]);
        // less = [F, T, T, F], rolled = [F, F, T, T]
        assert_eq!(s.black, array![false, true, true, true]);
        assert_eq!(s.white, array![true, true, false, true]);
        assert_eq!(s.black_segments(), vec![1, 2]);
        assert_eq!(s.white_segments(), vec![0]);
    }

    #[test]
    fn step_points_hold_until_next_ply() {
        let s = series(&[0.2, 0.8]);
        assert_eq!(s.step_points(), vec![(1.0, 0.2), (1.5, 0.2), (1.5, 0.8)]);
    }
}
