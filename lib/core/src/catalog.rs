use crate::{Error, ItemId, ItemRecord, Result};
use ahash::{AHashMap, AHashSet};
use parking_lot::RwLock;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Languages listed first (in this order) when building language facets
pub const PREFERRED_LANGUAGE_ORDER: [&str; 5] = ["Tamil", "Hindi", "English", "Telugu", "Kannada"];

/// An immutable, ordered collection of items
///
/// Item order is the order of the source document and is what ranking falls
/// back to when two candidates tie.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Arc<[ItemRecord]>,
    index: AHashMap<ItemId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(items: Vec<ItemRecord>) -> Result<Self> {
        let mut index = AHashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.id, pos).is_some() {
                return Err(Error::DuplicateItem(item.id));
            }
        }

        Ok(Self {
            items: items.into(),
            index,
        })
    }

    /// Catalog with no items
    pub fn empty() -> Self {
        Self {
            items: Arc::from(Vec::new()),
            index: AHashMap::new(),
        }
    }

    /// Parse a JSON array of records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<ItemRecord> = serde_json::from_str(json)?;
        Self::new(items)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let items: Vec<ItemRecord> = serde_json::from_reader(reader)?;
        Self::new(items)
    }

    /// Load a catalog document from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading catalog from {:?}", path);
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(std::io::BufReader::new(file))?;
        info!("Loaded {} items from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemRecord> {
        self.items.iter()
    }

    pub fn get(&self, id: ItemId) -> Option<&ItemRecord> {
        self.index.get(&id).map(|&pos| &self.items[pos])
    }

    /// Look up an item, failing with [`Error::ItemNotFound`]
    pub fn resolve(&self, id: ItemId) -> Result<&ItemRecord> {
        self.get(id).ok_or(Error::ItemNotFound(id))
    }

    /// All genres in the catalog, sorted and deduplicated
    pub fn genres(&self) -> Vec<String> {
        let unique: AHashSet<&str> = self
            .items
            .iter()
            .flat_map(|item| item.genres.iter().map(String::as_str))
            .collect();
        let mut genres: Vec<String> = unique.into_iter().map(str::to_string).collect();
        genres.sort();
        genres
    }

    /// All languages in the catalog
    ///
    /// Languages from [`PREFERRED_LANGUAGE_ORDER`] come first, the rest follow
    /// in order of first appearance.
    pub fn languages(&self) -> Vec<String> {
        let mut seen = AHashSet::new();
        let mut in_order: Vec<&str> = Vec::new();
        for item in self.items.iter() {
            if seen.insert(item.language.as_str()) {
                in_order.push(item.language.as_str());
            }
        }

        let mut languages: Vec<String> = PREFERRED_LANGUAGE_ORDER
            .iter()
            .filter(|lang| seen.contains(*lang))
            .map(|lang| lang.to_string())
            .collect();
        for lang in in_order {
            if !PREFERRED_LANGUAGE_ORDER.contains(&lang) {
                languages.push(lang.to_string());
            }
        }
        languages
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ItemRecord;
    type IntoIter = std::slice::Iter<'a, ItemRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Shared handle to the current catalog snapshot
///
/// Readers take an `Arc` snapshot and keep it for the whole request. A refresh
/// swaps the reference, so in-flight readers keep seeing the old catalog.
#[derive(Debug, Clone)]
pub struct CatalogHandle {
    current: Arc<RwLock<Arc<Catalog>>>,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        self.current.read().clone()
    }

    /// Replace the catalog, returning the previous snapshot
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        info!("Replacing catalog snapshot ({} items)", next.len());
        std::mem::replace(&mut *self.current.write(), next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn item(id: ItemId, language: &str, genres: &[&str]) -> ItemRecord {
        ItemRecord::new(id, format!("Movie {}", id))
            .with_language(language)
            .with_genres(genres.iter().copied())
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::new(vec![
            item(1, "Tamil", &["Action"]),
            item(2, "Hindi", &["Drama"]),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(2).unwrap().language, "Hindi");
        assert!(catalog.get(3).is_none());
        assert!(matches!(catalog.resolve(3), Err(Error::ItemNotFound(3))));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![item(1, "Tamil", &[]), item(1, "Hindi", &[])]);
        assert!(matches!(result, Err(Error::DuplicateItem(1))));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.genres().is_empty());
        assert!(catalog.languages().is_empty());
    }

    #[test]
    fn test_genre_facets_sorted_unique() {
        let catalog = Catalog::new(vec![
            item(1, "Tamil", &["Thriller", "Action"]),
            item(2, "Hindi", &["Drama", "Action"]),
        ])
        .unwrap();

        assert_eq!(catalog.genres(), vec!["Action", "Drama", "Thriller"]);
    }

    #[test]
    fn test_language_facets_preferred_order() {
        let catalog = Catalog::new(vec![
            item(1, "Malayalam", &[]),
            item(2, "English", &[]),
            item(3, "Korean", &[]),
            item(4, "Tamil", &[]),
            item(5, "English", &[]),
        ])
        .unwrap();

        assert_eq!(catalog.languages(), vec!["Tamil", "English", "Malayalam", "Korean"]);
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {"id": 1, "title": "A", "year": 2020, "rating": 7.5, "language": "Tamil",
             "director": "X", "genres": ["Action"], "cast": ["P"], "poster": "", "description": ""},
            {"id": 2, "title": "B", "year": 2021, "rating": 6.0, "language": "Hindi",
             "director": "Y"}
        ]"#;

        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].title, "A");
        assert!(catalog.get(2).unwrap().cast.is_empty());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = Catalog::from_json_str(r#"[{"id": "one"}]"#);
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 9, "title": "C", "year": 1999, "rating": 9.1, "language": "Telugu", "director": "Z"}}]"#
        )
        .unwrap();

        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.resolve(9).unwrap().language, "Telugu");
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::from_path(dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_handle_replace_keeps_old_snapshot() {
        let handle = CatalogHandle::new(Catalog::new(vec![item(1, "Tamil", &[])]).unwrap());
        let before = handle.snapshot();

        let previous = handle.replace(Catalog::new(vec![item(2, "Hindi", &[]), item(3, "English", &[])]).unwrap());

        assert_eq!(before.len(), 1);
        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(handle.snapshot().len(), 2);
        assert!(handle.snapshot().get(1).is_none());
    }
}
