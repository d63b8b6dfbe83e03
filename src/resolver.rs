//! Author Resolver
//!
//! Orchestrates the three lookup strategies behind a single entry point:
//!
//! 1. **Local table (primary)**: instant, no network, covers the well-known
//!    titles shipped with the crate.
//! 2. **Google Books (first fallback)**: title-restricted search, one result.
//! 3. **Open Library (second fallback)**: plain title search, one result.
//!
//! In `Auto` mode the strategies run strictly in that order and resolution
//! stops at the first hit; when every strategy misses, the last attempted
//! (negative) result is what the caller gets. The other modes pin resolution
//! to a single strategy. The returned vector always has length 1.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{CatalogAdapter, GoogleBooksClient, OpenLibraryClient};
use crate::config::CatalogConfig;
use crate::local::LocalCatalog;
use crate::types::{CatalogEntry, LookupResult};

/// Which strategies a resolution is allowed to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Local table, then Google Books, then Open Library, first hit wins.
    Auto,
    LocalOnly,
    GoogleBooksOnly,
    OpenLibraryOnly,
}

pub struct Resolver {
    local: LocalCatalog,
    google_books: GoogleBooksClient,
    open_library: OpenLibraryClient,
}

impl Resolver {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            local: LocalCatalog::new(),
            google_books: GoogleBooksClient::from_config(config),
            open_library: OpenLibraryClient::from_config(config),
        }
    }

    /// Resolve a title to an author according to `mode`.
    ///
    /// Strategies run sequentially, each blocking until its own completion;
    /// no network call happens after a hit, and none at all when the local
    /// table already matched in `Auto` mode.
    pub async fn resolve(&self, query: &str, mode: Mode) -> Vec<LookupResult> {
        info!(query = %query, ?mode, "resolving author");

        let result = match mode {
            Mode::LocalOnly => self.local.lookup(query),
            Mode::GoogleBooksOnly => self.google_books.lookup(query).await,
            Mode::OpenLibraryOnly => self.open_library.lookup(query).await,
            Mode::Auto => {
                let mut result = self.local.lookup(query);
                if !result.found {
                    debug!(query = %query, "local table missed, trying Google Books");
                    result = self.google_books.lookup(query).await;
                }
                if !result.found {
                    debug!(query = %query, "Google Books missed, trying Open Library");
                    result = self.open_library.lookup(query).await;
                }
                result
            }
        };

        if result.found {
            info!(source = %result.source, author = ?result.author, "author found");
        } else {
            info!(query = %query, "no author found");
        }

        vec![result]
    }

    /// The fixed table entries, for the "popular books" panel.
    pub fn popular_entries(&self, n: usize) -> &[CatalogEntry] {
        self.local.popular(n)
    }

    pub fn local(&self) -> &LocalCatalog {
        &self.local
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}
