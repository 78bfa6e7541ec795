//! Ranking of candidate strings against a query.
//!
//! Brute-force by design: one distance computation per candidate followed by
//! a stable comparison sort. Candidate collections are expected to be small;
//! callers that want parallelism can rank disjoint subsets and merge.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::metric::{MetricOrdering, StringMetric};

/// Configuration for a ranking operation.
///
/// A plain immutable value passed by value into [`rank`]; the default keeps
/// every candidate and returns all of them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RankConfig {
    /// Distance cutoff. A candidate is kept only if its distance passes the
    /// metric's threshold test; `None` keeps every candidate.
    pub threshold: Option<f64>,
    /// Maximum number of entries to return; `None` is unlimited.
    pub max_results: Option<usize>,
}

/// A candidate retained by a ranking operation, with its computed distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    /// The candidate in its original casing.
    pub text: String,
    /// Distance between the case-folded candidate and the case-folded query.
    pub distance: f64,
}

/// Rank `candidates` by similarity to `query` under `metric`.
///
/// Both sides are lower-cased before comparison; the returned entries keep
/// the original casing. Entries are ordered best match first (ascending
/// distance for natural-ordered metrics, descending for inverse-ordered
/// ones); candidates at equal distance keep their original relative order.
pub fn rank<S: AsRef<str>>(
    metric: StringMetric,
    candidates: &[S],
    query: &str,
    config: RankConfig,
) -> Vec<RankedCandidate> {
    let folded_query = query.to_lowercase();
    let ordering = metric.ordering();

    let mut entries: Vec<RankedCandidate> = candidates
        .iter()
        .map(|candidate| candidate.as_ref())
        .filter_map(|candidate| {
            let distance = metric.compute(&candidate.to_lowercase(), &folded_query);
            let keep = match config.threshold {
                Some(threshold) => ordering.within_threshold(distance, threshold),
                None => true,
            };

            if keep {
                Some(RankedCandidate {
                    text: candidate.to_string(),
                    distance,
                })
            } else {
                None
            }
        })
        .collect();

    // Vec::sort_by is stable, so tied candidates keep their input order.
    match ordering {
        MetricOrdering::Natural => entries.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
        }),
        MetricOrdering::Inverse => entries.sort_by(|a, b| {
            b.distance
                .partial_cmp(&a.distance)
                .unwrap_or(Ordering::Equal)
        }),
    }

    if let Some(max_results) = config.max_results {
        entries.truncate(max_results);
    }

    entries
}
