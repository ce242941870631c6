//! # CineMatch Core
//!
//! Core data structures for the CineMatch recommender.
//!
//! - [`ItemRecord`] - A catalog entry (title, director, genres, cast, language, ...)
//! - [`Catalog`] - Immutable, ordered item collection with id lookup and facets
//! - [`CatalogHandle`] - Shared snapshot that can be swapped atomically
//! - [`BrowseQuery`] - Genre / language / text filtering and ordering
//!
//! ## Example
//!
//! ```rust
//! use cinematch_core::{Catalog, ItemRecord, BrowseQuery, SortKey};
//!
//! let catalog = Catalog::new(vec![
//!     ItemRecord::new(1, "Vikram").with_language("Tamil").with_genres(["Action"]),
//!     ItemRecord::new(2, "Kaithi").with_language("Tamil").with_genres(["Action", "Thriller"]),
//! ]).unwrap();
//!
//! let source = catalog.resolve(1).unwrap();
//! assert_eq!(source.title, "Vikram");
//!
//! let thrillers = BrowseQuery::new().genre("Thriller").sort(SortKey::Title).apply(&catalog);
//! assert_eq!(thrillers.len(), 1);
//! ```

pub mod item;
pub mod catalog;
pub mod error;
pub mod filter;

pub use item::{ItemId, ItemRecord};
pub use catalog::{Catalog, CatalogHandle, PREFERRED_LANGUAGE_ORDER};
pub use error::{Error, Result};
pub use filter::{Filter, ItemFilter, BrowseQuery, SortKey};
