use serde::{Deserialize, Serialize};

/// Catalog-wide unique item identifier
pub type ItemId = u64;

/// A single catalog entry
///
/// Only `director`, `genres`, `cast` and `language` take part in similarity
/// scoring. The remaining fields are carried through for display and browsing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemRecord {
    pub id: ItemId,
    pub title: String,
    pub year: i32,
    /// Rating on a 0-10 scale
    pub rating: f64,
    pub language: String,
    pub director: String,
    /// Genre names in display order. Scoring treats them as a set.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Cast names in display order. Scoring treats them as a set.
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub poster: String,
    #[serde(default)]
    pub description: String,
}

impl ItemRecord {
    /// Create a record with the scoring-relevant fields; display fields are empty
    #[must_use]
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            year: 0,
            rating: 0.0,
            language: String::new(),
            director: String::new(),
            genres: Vec::new(),
            cast: Vec::new(),
            poster: String::new(),
            description: String::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = director.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_cast<I, S>(mut self, cast: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cast = cast.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Text searched by free-text browse queries
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3 + self.genres.len() + self.cast.len());
        parts.push(&self.title);
        parts.push(&self.director);
        parts.extend(self.genres.iter().map(String::as_str));
        parts.push(&self.language);
        parts.extend(self.cast.iter().map(String::as_str));
        parts.join(" ")
    }
}
