//! # CineMatch
//!
//! Content-based movie recommendations from an in-memory catalog.
//!
//! Each candidate is compared with the chosen movie on four features:
//! director (4 points), each shared genre (3), each shared cast member (2)
//! and language (1). The achieved points are normalized against the
//! achievable points to a 0-100 match score.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cinematch serve --catalog data/movies.json --http-port 8080
//! curl localhost:8080/items/1/recommendations
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use cinematch::prelude::*;
//!
//! let catalog = Catalog::from_path("data/movies.json").unwrap();
//! let source = catalog.resolve(1).unwrap();
//!
//! for rec in recommend(source, &catalog, DEFAULT_LIMIT) {
//!     println!("{} {}% {:?}", rec.item.title, rec.score, explain(source, rec.item));
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `cinematch-core` - Item records, catalog snapshots, browse filters
//! - `cinematch-similarity` - Scoring, ranking and match rationale
//! - `cinematch-api` - REST API

// Re-export core types
pub use cinematch_core::{
    Catalog, CatalogHandle, ItemId, ItemRecord,
    BrowseQuery, SortKey, Filter, ItemFilter,
    Error, Result,
};

// Re-export similarity engine
pub use cinematch_similarity::{
    score, recommend, explain, reasons,
    SimilarityScorer, FeatureWeights, ScoreBreakdown, SELF_MATCH,
    Recommender, Recommendation, RecommendationStats, DEFAULT_LIMIT,
    MatchReason, ExplainedRecommendation, RecommendResponse,
};

// Re-export API
pub use cinematch_api::{AppState, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, CatalogHandle, ItemId, ItemRecord,
        BrowseQuery, SortKey,
        Error, Result,
        score, recommend, explain,
        SimilarityScorer, FeatureWeights, Recommender, Recommendation, DEFAULT_LIMIT,
        RestApi, AppState,
    };
}
