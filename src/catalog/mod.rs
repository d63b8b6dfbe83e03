// Remote catalog abstraction layer

pub mod google_books;
pub mod open_library;

pub use google_books::GoogleBooksClient;
pub use open_library::OpenLibraryClient;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::types::{LookupResult, Source};

/// Errors that can occur while querying a remote catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("no usable match in response")]
    NoMatch,
}

/// A remote bibliographic catalog queried over HTTP.
///
/// `query` performs exactly one GET against the provider and reports what
/// happened; `lookup` is the caller-facing entry point that contains every
/// failure at this boundary. Transport errors (connect, timeout, body
/// decode) keep their diagnostic in `LookupResult::error`; a bad status or
/// an empty/author-less response is just a quiet miss.
#[async_trait]
pub trait CatalogAdapter: Send + Sync {
    fn source(&self) -> Source;

    async fn query(&self, title: &str) -> Result<LookupResult, CatalogError>;

    async fn lookup(&self, title: &str) -> LookupResult {
        match self.query(title).await {
            Ok(result) => result,
            Err(CatalogError::Http(e)) => {
                warn!(source = %self.source(), error = %e, "catalog request failed");
                LookupResult::miss_with_error(self.source(), e.to_string())
            }
            Err(CatalogError::Status(status)) => {
                warn!(source = %self.source(), %status, "catalog returned bad status");
                LookupResult::miss(self.source())
            }
            Err(CatalogError::NoMatch) => LookupResult::miss(self.source()),
        }
    }
}
