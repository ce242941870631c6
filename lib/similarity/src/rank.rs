//! Recommendation ranking
//!
//! Scores every catalog item against a source item, keeps positive scores and
//! returns the best matches in descending score order.

use crate::score::SimilarityScorer;
use cinematch_core::ItemRecord;
use serde::Serialize;

/// Number of recommendations returned when no limit is given
pub const DEFAULT_LIMIT: usize = 8;

/// A recommended item with its similarity score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation<'a> {
    /// The recommended catalog item
    pub item: &'a ItemRecord,
    /// Similarity score in `[1, 100]`
    pub score: i32,
}

impl<'a> Recommendation<'a> {
    pub fn id(&self) -> u64 {
        self.item.id
    }
}

/// Ranks catalog items by similarity to a source item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommender {
    scorer: SimilarityScorer,
    limit: usize,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(SimilarityScorer::default())
    }
}

impl Recommender {
    /// Create a recommender returning at most [`DEFAULT_LIMIT`] results
    pub fn new(scorer: SimilarityScorer) -> Self {
        Self {
            scorer,
            limit: DEFAULT_LIMIT,
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Recommend up to the configured limit
    pub fn recommend<'a, I>(&self, source: &ItemRecord, catalog: I) -> Vec<Recommendation<'a>>
    where
        I: IntoIterator<Item = &'a ItemRecord>,
    {
        self.recommend_with_limit(source, catalog, self.limit)
    }

    /// Recommend up to `limit` items
    ///
    /// The source itself and zero-similarity items are never returned. Items
    /// with equal scores keep their catalog order.
    pub fn recommend_with_limit<'a, I>(
        &self,
        source: &ItemRecord,
        catalog: I,
        limit: usize,
    ) -> Vec<Recommendation<'a>>
    where
        I: IntoIterator<Item = &'a ItemRecord>,
    {
        let mut results: Vec<Recommendation<'a>> = catalog
            .into_iter()
            .map(|item| Recommendation {
                item,
                score: self.scorer.score(source, item),
            })
            .filter(|rec| rec.score > 0)
            .collect();

        // sort_by is stable
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(limit);
        results
    }
}

/// Recommend with the default weights
pub fn recommend<'a, I>(source: &ItemRecord, catalog: I, limit: usize) -> Vec<Recommendation<'a>>
where
    I: IntoIterator<Item = &'a ItemRecord>,
{
    Recommender::default().recommend_with_limit(source, catalog, limit)
}

/// Summary statistics for one recommendation request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationStats {
    /// Number of catalog items scored
    pub candidates_count: usize,
    /// Number of recommendations returned
    pub results_count: usize,
    /// Mean score of the returned recommendations
    pub avg_score: f32,
    /// Score of the top recommendation
    pub best_score: i32,
}

impl RecommendationStats {
    /// Compute stats from ranked results
    pub fn compute(results: &[Recommendation<'_>], candidates_count: usize) -> Self {
        if results.is_empty() {
            return Self {
                candidates_count,
                results_count: 0,
                avg_score: 0.0,
                best_score: 0,
            };
        }

        let total: i64 = results.iter().map(|r| i64::from(r.score)).sum();
        let avg_score = total as f32 / results.len() as f32;
        // Results are sorted
        let best_score = results[0].score;

        Self {
            candidates_count,
            results_count: results.len(),
            avg_score,
            best_score,
        }
    }
}
