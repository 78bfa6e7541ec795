//! Metric descriptors for string similarity calculation.
//!
//! A [`StringMetric`] bundles a distance computation with its ordering
//! polarity, so callers can threshold-match and rank candidates without
//! knowing which direction "more similar" points.

use serde::{Deserialize, Serialize};

use crate::distance::{damerau_levenshtein_distance, dice_coefficient, levenshtein_distance};
use crate::error::{Result, TextSimError};
use crate::rank::{self, RankConfig};

/// Ordering polarity of a string metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricOrdering {
    /// Smaller value means more similar (edit distances).
    Natural,
    /// Larger value means more similar (Dice's coefficient).
    Inverse,
}

impl MetricOrdering {
    /// Whether a distance passes the threshold test under this ordering.
    pub fn within_threshold(&self, distance: f64, threshold: f64) -> bool {
        match self {
            MetricOrdering::Natural => distance <= threshold,
            MetricOrdering::Inverse => distance >= threshold,
        }
    }
}

/// String metrics for similarity calculation between two strings.
///
/// Each variant is an immutable, stateless descriptor; a value can be shared
/// and reused across any number of comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StringMetric {
    /// Levenshtein edit distance
    #[default]
    Levenshtein,
    /// Damerau-Levenshtein edit distance (transpositions count as one edit)
    DamerauLevenshtein,
    /// Dice's bigram coefficient (higher is more similar)
    Dice,
}

impl StringMetric {
    /// Calculate the distance between two strings using this metric.
    ///
    /// Edit distances are whole numbers widened to `f64`; the Dice
    /// coefficient lies in [0.0, 1.0]. Comparison is case-sensitive here;
    /// [`sort`](Self::sort) folds case before comparing.
    pub fn compute(&self, source: &str, target: &str) -> f64 {
        match self {
            StringMetric::Levenshtein => levenshtein_distance(source, target) as f64,
            StringMetric::DamerauLevenshtein => {
                damerau_levenshtein_distance(source, target) as f64
            }
            StringMetric::Dice => dice_coefficient(source, target),
        }
    }

    /// Calculate similarity (0-1, higher is more similar) between two strings.
    pub fn similarity(&self, source: &str, target: &str) -> f64 {
        match self {
            StringMetric::Levenshtein | StringMetric::DamerauLevenshtein => {
                let max_len = source.chars().count().max(target.chars().count());
                if max_len == 0 {
                    1.0
                } else {
                    1.0 - self.compute(source, target) / max_len as f64
                }
            }
            StringMetric::Dice => dice_coefficient(source, target),
        }
    }

    /// Get the ordering polarity of this metric.
    pub fn ordering(&self) -> MetricOrdering {
        match self {
            StringMetric::Levenshtein | StringMetric::DamerauLevenshtein => {
                MetricOrdering::Natural
            }
            StringMetric::Dice => MetricOrdering::Inverse,
        }
    }

    /// Returns whether the two strings match under the given threshold:
    /// distance at or below it for natural-ordered metrics, at or above it
    /// for inverse-ordered metrics.
    ///
    /// The threshold is mandatory: an unthresholded match has no
    /// well-defined boolean answer, so `None` fails with
    /// [`TextSimError::InvalidArgument`] before any comparison is performed.
    pub fn is_match(&self, source: &str, target: &str, threshold: Option<f64>) -> Result<bool> {
        let Some(threshold) = threshold else {
            return Err(TextSimError::invalid_argument(
                "a threshold must be supplied for is_match",
            ));
        };

        let distance = self.compute(source, target);
        Ok(self.ordering().within_threshold(distance, threshold))
    }

    /// Sort `candidates` by similarity to `query`, best match first.
    ///
    /// Query and candidates are lower-cased before comparison, and only
    /// candidates passing the threshold test are kept; omitting the
    /// threshold keeps everything. Returned candidates preserve their
    /// original casing, and candidates at equal distance keep their original
    /// relative order.
    pub fn sort<S: AsRef<str>>(
        &self,
        candidates: &[S],
        query: &str,
        threshold: Option<f64>,
    ) -> Vec<String> {
        let config = RankConfig {
            threshold,
            max_results: None,
        };

        rank::rank(*self, candidates, query, config)
            .into_iter()
            .map(|entry| entry.text)
            .collect()
    }

    /// Get the name of this string metric.
    pub fn name(&self) -> &'static str {
        match self {
            StringMetric::Levenshtein => "levenshtein",
            StringMetric::DamerauLevenshtein => "damerau_levenshtein",
            StringMetric::Dice => "dice",
        }
    }

    /// Parse a string metric from a string.
    pub fn parse_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "levenshtein" => Ok(StringMetric::Levenshtein),
            "damerau_levenshtein" | "damerau" => Ok(StringMetric::DamerauLevenshtein),
            "dice" => Ok(StringMetric::Dice),
            _ => Err(TextSimError::metric(format!("Unknown string metric: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_dispatch() {
        assert_eq!(StringMetric::Levenshtein.compute("ab", "ba"), 2.0);
        assert_eq!(StringMetric::DamerauLevenshtein.compute("ab", "ba"), 1.0);
        assert!((StringMetric::Dice.compute("night", "nacht") - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_ordering_polarity() {
        assert_eq!(StringMetric::Levenshtein.ordering(), MetricOrdering::Natural);
        assert_eq!(
            StringMetric::DamerauLevenshtein.ordering(),
            MetricOrdering::Natural
        );
        assert_eq!(StringMetric::Dice.ordering(), MetricOrdering::Inverse);
    }

    #[test]
    fn test_within_threshold() {
        assert!(MetricOrdering::Natural.within_threshold(1.0, 2.0));
        assert!(MetricOrdering::Natural.within_threshold(2.0, 2.0));
        assert!(!MetricOrdering::Natural.within_threshold(3.0, 2.0));

        assert!(MetricOrdering::Inverse.within_threshold(0.8, 0.5));
        assert!(MetricOrdering::Inverse.within_threshold(0.5, 0.5));
        assert!(!MetricOrdering::Inverse.within_threshold(0.2, 0.5));
    }

    #[test]
    fn test_is_match_natural() {
        let metric = StringMetric::Levenshtein;
        assert!(metric.is_match("kitten", "sitting", Some(3.0)).unwrap());
        assert!(!metric.is_match("kitten", "sitting", Some(2.0)).unwrap());
    }

    #[test]
    fn test_is_match_inverse() {
        let metric = StringMetric::Dice;
        assert!(metric.is_match("night", "nacht", Some(0.2)).unwrap());
        assert!(!metric.is_match("night", "nacht", Some(0.3)).unwrap());
    }

    #[test]
    fn test_is_match_requires_threshold() {
        let result = StringMetric::Levenshtein.is_match("a", "b", None);
        assert!(matches!(result, Err(TextSimError::InvalidArgument(_))));
    }

    #[test]
    fn test_similarity_bounds() {
        let pairs = [("kitten", "sitting"), ("night", "nacht"), ("", ""), ("a", "")];
        for metric in [
            StringMetric::Levenshtein,
            StringMetric::DamerauLevenshtein,
            StringMetric::Dice,
        ] {
            for (a, b) in pairs {
                let similarity = metric.similarity(a, b);
                assert!(
                    (0.0..=1.0).contains(&similarity),
                    "{} similarity out of bounds for {:?}",
                    metric.name(),
                    (a, b)
                );
            }
        }
    }

    #[test]
    fn test_similarity_identity() {
        assert_eq!(StringMetric::Levenshtein.similarity("abc", "abc"), 1.0);
        assert_eq!(StringMetric::DamerauLevenshtein.similarity("", ""), 1.0);
        assert_eq!(StringMetric::Dice.similarity("abc", "abc"), 1.0);
    }

    #[test]
    fn test_parse_str() {
        assert_eq!(
            StringMetric::parse_str("levenshtein").unwrap(),
            StringMetric::Levenshtein
        );
        assert_eq!(
            StringMetric::parse_str("Damerau").unwrap(),
            StringMetric::DamerauLevenshtein
        );
        assert_eq!(StringMetric::parse_str("dice").unwrap(), StringMetric::Dice);
        assert!(StringMetric::parse_str("jaro").is_err());
    }

    #[test]
    fn test_name_round_trip() {
        for metric in [
            StringMetric::Levenshtein,
            StringMetric::DamerauLevenshtein,
            StringMetric::Dice,
        ] {
            assert_eq!(StringMetric::parse_str(metric.name()).unwrap(), metric);
        }
    }
}
