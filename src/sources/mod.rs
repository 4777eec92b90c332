//! Knowledge source adapter implementations.
//!
//! Each module provides a struct implementing [`crate::adapter::SourceAdapter`]
//! that queries one external endpoint and normalizes its response shape.

pub mod arxiv;
pub mod dbpedia;
pub mod duckduckgo;
pub mod openlibrary;
pub mod wikidata;
pub mod wikipedia;

pub use arxiv::ArxivAdapter;
pub use dbpedia::DbPediaAdapter;
pub use duckduckgo::DuckDuckGoAdapter;
pub use openlibrary::OpenLibraryAdapter;
pub use wikidata::WikidataAdapter;
pub use wikipedia::WikipediaAdapter;
