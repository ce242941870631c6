//! Pairwise similarity scoring
//!
//! Compares two items feature by feature and normalizes the achieved points
//! against the points the pair could have achieved. Scores are integers in
//! `[0, 100]`; comparing an item with itself yields [`SELF_MATCH`].

use crate::weights::FeatureWeights;
use ahash::AHashSet;
use cinematch_core::ItemRecord;
use serde::Serialize;

/// Score returned when source and target are the same item
pub const SELF_MATCH: i32 = -1;

/// Achieved and achievable points for one feature
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct FeaturePoints {
    pub achieved: u64,
    pub max: u64,
}

/// Per-feature points for one scored pair
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub director: FeaturePoints,
    pub genres: FeaturePoints,
    pub cast: FeaturePoints,
    pub language: FeaturePoints,
}

impl ScoreBreakdown {
    pub fn achieved(&self) -> u64 {
        self.director.achieved + self.genres.achieved + self.cast.achieved + self.language.achieved
    }

    pub fn max(&self) -> u64 {
        self.director.max + self.genres.max + self.cast.max + self.language.max
    }

    /// Normalized score in `[0, 100]`, 0 when nothing was achievable
    pub fn percent(&self) -> i32 {
        round_percent(self.achieved(), self.max())
    }
}

/// Round `achieved / max * 100` half away from zero
///
/// Both operands are non-negative, so this is floor(x + 0.5) done in integers.
/// `achieved <= max` keeps the result in `[0, 100]`.
fn round_percent(achieved: u64, max: u64) -> i32 {
    if max == 0 {
        return 0;
    }
    let achieved = u128::from(achieved);
    let max = u128::from(max);
    ((200 * achieved + max) / (2 * max)) as i32
}

/// Exact-match feature: full weight or nothing
#[inline]
fn exact_points(a: &str, b: &str, weight: u32) -> FeaturePoints {
    let weight = u64::from(weight);
    FeaturePoints {
        achieved: if a == b { weight } else { 0 },
        max: weight,
    }
}

/// Set-overlap feature: weight per shared value, normalized by the larger set
fn overlap_points(a: &[String], b: &[String], weight: u32) -> FeaturePoints {
    let set_a: AHashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: AHashSet<&str> = b.iter().map(String::as_str).collect();

    let overlap = set_a.iter().filter(|value| set_b.contains(*value)).count() as u64;
    let largest = set_a.len().max(set_b.len()) as u64;
    let weight = u64::from(weight);

    FeaturePoints {
        achieved: weight * overlap,
        max: weight * largest,
    }
}

/// Weighted feature-overlap scorer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimilarityScorer {
    weights: FeatureWeights,
}

impl SimilarityScorer {
    pub fn new(weights: FeatureWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &FeatureWeights {
        &self.weights
    }

    /// Per-feature points, or `None` when comparing an item with itself
    pub fn breakdown(&self, source: &ItemRecord, target: &ItemRecord) -> Option<ScoreBreakdown> {
        if source.id == target.id {
            return None;
        }

        Some(ScoreBreakdown {
            director: exact_points(&source.director, &target.director, self.weights.director),
            genres: overlap_points(&source.genres, &target.genres, self.weights.genre),
            cast: overlap_points(&source.cast, &target.cast, self.weights.cast),
            language: exact_points(&source.language, &target.language, self.weights.language),
        })
    }

    /// Similarity of `target` to `source` in `[0, 100]`, or [`SELF_MATCH`]
    pub fn score(&self, source: &ItemRecord, target: &ItemRecord) -> i32 {
        self.breakdown(source, target)
            .map_or(SELF_MATCH, |breakdown| breakdown.percent())
    }
}

/// Score a pair with the default weights
pub fn score(source: &ItemRecord, target: &ItemRecord) -> i32 {
    SimilarityScorer::default().score(source, target)
}
