//! # CineMatch API
//!
//! REST endpoints over a shared catalog snapshot:
//!
//! - `GET /health`
//! - `GET /facets` - genre and language filter chips
//! - `GET /items?genre=&language=&q=&sort=` - browse the catalog
//! - `GET /items/{id}` - one item
//! - `GET /items/{id}/recommendations?limit=` - explained recommendations

pub mod rest;

pub use rest::{AppState, RestApi};
