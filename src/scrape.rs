//! Extraction of evaluations from free-form text.
//!
//! Game records annotated by an engine carry one evaluation per ply,
//! written as a percentage with exactly one decimal (`57.3%`). Everything
//! around those tokens is ignored.

use std::{collections::HashSet, convert::Infallible, str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::types::{Evaluation, Evaluations};

/// One to three digits, a decimal point, one digit, then a percent sign.
/// The match is unanchored, so `1234.5%` yields `234.5%`.
static EVALUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{1,3}\.[0-9])%").expect("valid evaluation regex"));

/// Anything that looks like a percentage, used to spot tokens the strict
/// pattern skips.
static PERCENT_LIKE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+(?:\.[0-9]+)?%").expect("valid percent-like regex")
});

/// A percentage-looking token that did not yield an evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedToken {
    pub text: String,
    /// Byte offset of the token in the scanned text.
    pub offset: usize,
}

/// Result of scanning a text for evaluations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scrape {
    /// Evaluations in order of appearance.
    pub evaluations: Evaluations,
    /// Percent-like tokens that were skipped, in order of appearance.
    pub malformed: Vec<MalformedToken>,
}

impl Scrape {
    /// True when the text contained no evaluation at all.
    pub fn is_empty(&self) -> bool {
        self.evaluations.is_empty()
    }
}

/// Scan `text` for every non-overlapping evaluation token.
pub fn scrape(text: &str) -> Scrape {
    let mut accepted_ends = HashSet::new();
    let evaluations = EVALUATION_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let percent: f64 = caps[1].parse().ok()?;
            accepted_ends.insert(whole.end());
            Some(Evaluation::from_percent(percent))
        })
        .collect();

    // A strict match always ends on the same `%` as the percent-like
    // token containing it.
    let malformed = PERCENT_LIKE_RE
        .find_iter(text)
        .filter(|m| !accepted_ends.contains(&m.end()))
        .map(|m| MalformedToken {
            text: m.as_str().to_owned(),
            offset: m.start(),
        })
        .collect();

    Scrape {
        evaluations,
        malformed,
    }
}

/// Scan `text` and keep only the evaluations.
pub fn parse_evaluations(text: &str) -> Evaluations {
    scrape(text).evaluations
}

impl FromStr for Evaluations {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_evaluations(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(evals: &Evaluations) -> Vec<f64> {
        evals.values().collect()
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn extracts_in_order_of_appearance() {
        let evals = parse_evaluations("1. e4 {57.3%} e5 {42.0%} 2. Nf3 {71.5%}");
        assert_close(&values(&evals), &[0.573, 0.420, 0.715]);
    }

    #[test]
    fn ignores_surrounding_text() {
        let text = "[Event \"Casual\"]\n1. a1 50.0% b1 0.5%\n2. c3 100.0%\n";
        assert_close(&values(&parse_evaluations(text)), &[0.5, 0.005, 1.0]);
    }

    #[test]
    fn no_matches_is_empty_not_an_error() {
        let scrape = scrape("no numbers here");
        assert!(scrape.is_empty());
        assert!(scrape.malformed.is_empty());
    }

    #[test]
    fn leading_digits_beyond_three_are_dropped() {
        let scrape = scrape("1234.5%");
        assert_close(&values(&scrape.evaluations), &[2.345]);
        assert!(scrape.malformed.is_empty());
    }

    #[test]
    fn percent_tokens_without_one_decimal_are_reported() {
        let text = "a 57% b 61.2% c 57.35% d";
        let scrape = scrape(text);
        assert_close(&values(&scrape.evaluations), &[0.612]);
        assert_eq!(
            scrape.malformed,
            vec![
                MalformedToken {
                    text: "57%".to_owned(),
                    offset: 2,
                },
                MalformedToken {
                    text: "57.35%".to_owned(),
                    offset: 16,
                },
            ]
        );
    }

    #[test]
    fn adjacent_tokens_do_not_overlap() {
        let evals = parse_evaluations("10.0%20.0%30.0%");
        assert_close(&values(&evals), &[0.1, 0.2, 0.3]);
    }

    #[test]
    fn from_str_delegates_to_scraper() {
        let evals: Evaluations = "x 25.0% y 75.0%".parse().unwrap();
        assert_close(&values(&evals), &[0.25, 0.75]);
    }

    #[test]
    fn count_matches_pattern_count() {
        let text = "1.0% 22.2% 333.3% 4444.4% 5.55% 6%";
        let count = EVALUATION_RE.find_iter(text).count();
        assert_eq!(parse_evaluations(text).plies(), count);
        assert_eq!(count, 4);
    }
}
