// Shared types for the lookup pipeline

use serde::{Deserialize, Serialize};

/// Year string used when a provider carries no publication date.
pub const UNKNOWN_YEAR: &str = "Unknown";

/// Where a lookup result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Local,
    GoogleBooks,
    OpenLibrary,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Source::Local => "local database",
            Source::GoogleBooks => "Google Books API",
            Source::OpenLibrary => "Open Library API",
        };
        f.write_str(name)
    }
}

/// One entry of the fixed local table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    pub author: String,
}

/// Outcome of a single lookup attempt against one source.
///
/// `author` is comma-joined when the provider returns several names.
/// `year` is `Some("Unknown")` on a hit without a publication date, so
/// absence (`None`, only on misses) stays distinguishable from "no date".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResult {
    pub found: bool,
    pub author: Option<String>,
    pub matched_title: Option<String>,
    pub year: Option<String>,
    pub source: Source,
    pub error: Option<String>,
}

impl LookupResult {
    pub fn hit(
        source: Source,
        author: impl Into<String>,
        matched_title: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            found: true,
            author: Some(author.into()),
            matched_title: Some(matched_title.into()),
            year: Some(year.into()),
            source,
            error: None,
        }
    }

    /// A normal negative outcome: nothing matched, nothing went wrong.
    pub fn miss(source: Source) -> Self {
        Self {
            found: false,
            author: None,
            matched_title: None,
            year: None,
            source,
            error: None,
        }
    }

    /// A miss caused by a transport failure, with the diagnostic attached.
    pub fn miss_with_error(source: Source, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::miss(source)
        }
    }
}

/// One past search, as kept in the session history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRecord {
    pub queried_title: String,
    pub results: Vec<LookupResult>,
    pub timestamp: String,
}
