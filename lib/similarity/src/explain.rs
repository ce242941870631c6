//! Match rationale
//!
//! Human-readable reasons why a candidate matched a source item. Reasons are
//! for display only and never feed back into scores or ranking.

use crate::rank::{Recommendation, RecommendationStats};
use ahash::AHashSet;
use cinematch_core::{ItemId, ItemRecord};
use serde::Serialize;
use std::fmt;

/// One reason a candidate matched the source item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum MatchReason {
    SameDirector,
    /// Shared genres in the candidate's order
    SharedGenres(Vec<String>),
    /// Shared cast members in the candidate's order
    SharedCast(Vec<String>),
    SameLanguage,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchReason::SameDirector => write!(f, "Same Director"),
            MatchReason::SharedGenres(genres) => write!(f, "{}", genres.join(", ")),
            MatchReason::SharedCast(cast) => write!(f, "Shared Cast: {}", cast.join(", ")),
            MatchReason::SameLanguage => write!(f, "Same Language"),
        }
    }
}

/// Values of `candidate` that also appear in `source`, in candidate order
fn shared_in_candidate_order(source: &[String], candidate: &[String]) -> Vec<String> {
    let wanted: AHashSet<&str> = source.iter().map(String::as_str).collect();
    candidate
        .iter()
        .filter(|value| wanted.contains(value.as_str()))
        .cloned()
        .collect()
}

/// Match reasons in fixed order: director, genres, cast, language
pub fn reasons(source: &ItemRecord, candidate: &ItemRecord) -> Vec<MatchReason> {
    let mut reasons = Vec::with_capacity(4);

    if candidate.director == source.director {
        reasons.push(MatchReason::SameDirector);
    }

    let genres = shared_in_candidate_order(&source.genres, &candidate.genres);
    if !genres.is_empty() {
        reasons.push(MatchReason::SharedGenres(genres));
    }

    let cast = shared_in_candidate_order(&source.cast, &candidate.cast);
    if !cast.is_empty() {
        reasons.push(MatchReason::SharedCast(cast));
    }

    if candidate.language == source.language {
        reasons.push(MatchReason::SameLanguage);
    }

    reasons
}

/// Display tags explaining the match
pub fn explain(source: &ItemRecord, candidate: &ItemRecord) -> Vec<String> {
    reasons(source, candidate).iter().map(ToString::to_string).collect()
}

/// A recommendation with its display tags
#[derive(Debug, Clone, Serialize)]
pub struct ExplainedRecommendation {
    pub id: ItemId,
    pub title: String,
    pub score: i32,
    pub reasons: Vec<String>,
}

impl ExplainedRecommendation {
    pub fn from_recommendation(source: &ItemRecord, rec: &Recommendation<'_>) -> Self {
        Self {
            id: rec.item.id,
            title: rec.item.title.clone(),
            score: rec.score,
            reasons: explain(source, rec.item),
        }
    }

    pub fn from_list(source: &ItemRecord, recs: &[Recommendation<'_>]) -> Vec<Self> {
        recs.iter()
            .map(|rec| Self::from_recommendation(source, rec))
            .collect()
    }
}

/// Response body for a recommendation request
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub source: ItemRecord,
    pub result: Vec<ExplainedRecommendation>,
    pub stats: RecommendationStats,
}

impl RecommendResponse {
    pub fn new(source: &ItemRecord, recs: &[Recommendation<'_>], candidates_count: usize) -> Self {
        Self {
            source: source.clone(),
            result: ExplainedRecommendation::from_list(source, recs),
            stats: RecommendationStats::compute(recs, candidates_count),
        }
    }
}
