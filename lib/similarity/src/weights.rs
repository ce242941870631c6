//! Feature weights
//!
//! Points awarded per matching feature before normalization. The defaults
//! favour director over genre over cast over language.

use serde::{Deserialize, Serialize};

pub const DIRECTOR_WEIGHT: u32 = 4;
pub const GENRE_WEIGHT: u32 = 3;
pub const CAST_WEIGHT: u32 = 2;
pub const LANGUAGE_WEIGHT: u32 = 1;

/// Per-feature weights used by the scorer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureWeights {
    /// Points for an identical director
    #[serde(default = "default_director")]
    pub director: u32,

    /// Points per shared genre
    #[serde(default = "default_genre")]
    pub genre: u32,

    /// Points per shared cast member
    #[serde(default = "default_cast")]
    pub cast: u32,

    /// Points for an identical language
    #[serde(default = "default_language")]
    pub language: u32,
}

fn default_director() -> u32 {
    DIRECTOR_WEIGHT
}

fn default_genre() -> u32 {
    GENRE_WEIGHT
}

fn default_cast() -> u32 {
    CAST_WEIGHT
}

fn default_language() -> u32 {
    LANGUAGE_WEIGHT
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            director: DIRECTOR_WEIGHT,
            genre: GENRE_WEIGHT,
            cast: CAST_WEIGHT,
            language: LANGUAGE_WEIGHT,
        }
    }
}

impl FeatureWeights {
    pub fn new(director: u32, genre: u32, cast: u32, language: u32) -> Self {
        Self { director, genre, cast, language }
    }

    /// True when every weight is zero, i.e. every pair scores 0
    pub fn is_zero(&self) -> bool {
        self.director == 0 && self.genre == 0 && self.cast == 0 && self.language == 0
    }
}
