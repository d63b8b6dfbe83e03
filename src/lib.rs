// Bibliofind - book-title-to-author lookup with local table and API fallbacks

pub mod catalog; // Remote catalogs (Google Books, Open Library)
pub mod config;
pub mod local; // Fixed in-memory table, checked before any network call
pub mod resolver;
pub mod session; // Bounded search history and query suggestions
pub mod types;

// Re-exports for convenience
pub use catalog::{CatalogAdapter, CatalogError, GoogleBooksClient, OpenLibraryClient};
pub use config::Config;
pub use local::LocalCatalog;
pub use resolver::{Mode, Resolver};
pub use session::{suggested_terms, Session, HISTORY_LIMIT};
pub use types::{CatalogEntry, LookupResult, SearchRecord, Source};
