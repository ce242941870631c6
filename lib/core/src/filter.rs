// Browse filters over catalog items
use crate::{Catalog, ItemRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Placeholder value meaning "no restriction" for genre and language chips
pub const ALL: &str = "All";

pub trait Filter {
    fn matches(&self, item: &ItemRecord) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemFilter {
    /// Item lists the genre
    Genre(String),
    /// Item language equals the value
    Language(String),
    /// Case-insensitive substring over title, director, genres, language and cast
    Search(String),
    And(Vec<ItemFilter>),
}

impl ItemFilter {
    fn matches_condition(condition: &ItemFilter, item: &ItemRecord) -> bool {
        match condition {
            ItemFilter::Genre(genre) => item.genres.iter().any(|g| g == genre),
            ItemFilter::Language(language) => &item.language == language,
            ItemFilter::Search(query) => {
                let query = query.to_lowercase();
                item.searchable_text().to_lowercase().contains(&query)
            }
            ItemFilter::And(conditions) => {
                conditions.iter().all(|c| Self::matches_condition(c, item))
            }
        }
    }
}

impl Filter for ItemFilter {
    fn matches(&self, item: &ItemRecord) -> bool {
        Self::matches_condition(self, item)
    }
}

/// Ordering applied to browse results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Catalog order
    #[default]
    Default,
    /// Highest rating first
    Rating,
    /// Newest first
    Year,
    /// Alphabetical, case-insensitive
    Title,
}

impl std::str::FromStr for SortKey {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" | "default" => Ok(SortKey::Default),
            "rating" => Ok(SortKey::Rating),
            "year" => Ok(SortKey::Year),
            "title" => Ok(SortKey::Title),
            other => Err(crate::Error::InvalidConfig(format!("unknown sort key '{}'", other))),
        }
    }
}

impl SortKey {
    fn compare(self, a: &ItemRecord, b: &ItemRecord) -> Ordering {
        match self {
            SortKey::Default => Ordering::Equal,
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::Year => b.year.cmp(&a.year),
            SortKey::Title => a
                .title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.title.cmp(&b.title)),
        }
    }
}

/// One browse request: optional genre, language and text filters plus an ordering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseQuery {
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, rename = "q")]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: SortKey,
}

impl BrowseQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Combined filter; `None` when every item passes
    pub fn to_filter(&self) -> Option<ItemFilter> {
        let mut conditions = Vec::new();
        if let Some(genre) = self.genre.as_deref().filter(|g| !g.is_empty() && *g != ALL) {
            conditions.push(ItemFilter::Genre(genre.to_string()));
        }
        if let Some(language) = self.language.as_deref().filter(|l| !l.is_empty() && *l != ALL) {
            conditions.push(ItemFilter::Language(language.to_string()));
        }
        if let Some(query) = self.search.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            conditions.push(ItemFilter::Search(query.to_string()));
        }

        match conditions.len() {
            0 => None,
            1 => conditions.pop(),
            _ => Some(ItemFilter::And(conditions)),
        }
    }

    /// Filter and order the catalog. Sorting is stable.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ItemRecord> {
        let filter = self.to_filter();
        let mut items: Vec<&ItemRecord> = catalog
            .iter()
            .filter(|item| filter.as_ref().map_or(true, |f| f.matches(item)))
            .collect();

        if self.sort != SortKey::Default {
            items.sort_by(|a, b| self.sort.compare(a, b));
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            ItemRecord::new(1, "Vikram")
                .with_director("Lokesh Kanagaraj")
                .with_language("Tamil")
                .with_genres(["Action", "Thriller"])
                .with_cast(["Kamal Haasan"])
                .with_year(2022)
                .with_rating(8.4),
            ItemRecord::new(2, "andhadhun")
                .with_director("Sriram Raghavan")
                .with_language("Hindi")
                .with_genres(["Thriller", "Comedy"])
                .with_cast(["Ayushmann Khurrana"])
                .with_year(2018)
                .with_rating(8.2),
            ItemRecord::new(3, "Kaithi")
                .with_director("Lokesh Kanagaraj")
                .with_language("Tamil")
                .with_genres(["Action"])
                .with_cast(["Karthi"])
                .with_year(2019)
                .with_rating(8.4),
        ])
        .unwrap()
    }

    fn ids(items: &[&ItemRecord]) -> Vec<u64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_empty_query_keeps_catalog_order() {
        let catalog = catalog();
        assert_eq!(ids(&BrowseQuery::new().apply(&catalog)), vec![1, 2, 3]);
    }

    #[test]
    fn test_genre_filter() {
        let catalog = catalog();
        let result = BrowseQuery::new().genre("Action").apply(&catalog);
        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[test]
    fn test_all_means_unfiltered() {
        let catalog = catalog();
        let result = BrowseQuery::new().genre(ALL).language(ALL).apply(&catalog);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_language_and_genre_combined() {
        let catalog = catalog();
        let result = BrowseQuery::new().genre("Thriller").language("Tamil").apply(&catalog);
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let catalog = catalog();
        assert_eq!(ids(&BrowseQuery::new().search("lokesh").apply(&catalog)), vec![1, 3]);
        assert_eq!(ids(&BrowseQuery::new().search("KARTHI").apply(&catalog)), vec![3]);
        assert_eq!(ids(&BrowseQuery::new().search("comedy").apply(&catalog)), vec![2]);
        assert!(BrowseQuery::new().search("nothing like this").apply(&catalog).is_empty());
    }

    #[test]
    fn test_sort_by_rating_is_stable() {
        let catalog = catalog();
        let result = BrowseQuery::new().sort(SortKey::Rating).apply(&catalog);
        // 1 and 3 tie on rating and keep catalog order
        assert_eq!(ids(&result), vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_by_year_and_title() {
        let catalog = catalog();
        assert_eq!(ids(&BrowseQuery::new().sort(SortKey::Year).apply(&catalog)), vec![1, 3, 2]);
        assert_eq!(ids(&BrowseQuery::new().sort(SortKey::Title).apply(&catalog)), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("rating".parse::<SortKey>().unwrap(), SortKey::Rating);
        assert_eq!("Title".parse::<SortKey>().unwrap(), SortKey::Title);
        assert_eq!("".parse::<SortKey>().unwrap(), SortKey::Default);
        assert!("popularity".parse::<SortKey>().is_err());
    }
}
