//! # CineMatch Similarity
//!
//! Content-based recommendation by weighted feature overlap.
//!
//! ## Features
//!
//! - **Scoring**: Director, genre, cast and language overlap normalized to 0-100
//! - **Ranking**: Top matches for a source item, stable on ties
//! - **Explainability**: Display tags naming the features that matched
//!
//! ## Example
//!
//! ```rust
//! use cinematch_core::{Catalog, ItemRecord};
//! use cinematch_similarity::{recommend, explain, score, DEFAULT_LIMIT};
//!
//! let catalog = Catalog::new(vec![
//!     ItemRecord::new(1, "Source")
//!         .with_director("D1").with_language("EN")
//!         .with_genres(["Action", "Drama"]).with_cast(["X", "Y"]),
//!     ItemRecord::new(2, "Candidate")
//!         .with_director("D1").with_language("EN")
//!         .with_genres(["Action"]).with_cast(["X"]),
//! ]).unwrap();
//!
//! let source = catalog.resolve(1).unwrap();
//! assert_eq!(score(source, catalog.resolve(2).unwrap()), 67);
//!
//! let results = recommend(source, &catalog, DEFAULT_LIMIT);
//! assert_eq!(results.len(), 1);
//! assert_eq!(
//!     explain(source, results[0].item),
//!     vec!["Same Director", "Action", "Shared Cast: X", "Same Language"],
//! );
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Catalog   │────>│ Recommender │────>│   Ranked    │
//! │  (records)  │     │  (top-k)    │     │   results   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │                   │
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │   Scorer    │     │   Explain   │
//!                     │ (pairwise)  │     │   (tags)    │
//!                     └─────────────┘     └─────────────┘
//! ```

pub mod weights;
pub mod score;
pub mod rank;
pub mod explain;

pub use weights::FeatureWeights;
pub use score::{score, SimilarityScorer, ScoreBreakdown, FeaturePoints, SELF_MATCH};
pub use rank::{recommend, Recommender, Recommendation, RecommendationStats, DEFAULT_LIMIT};
pub use explain::{explain, reasons, MatchReason, ExplainedRecommendation, RecommendResponse};
