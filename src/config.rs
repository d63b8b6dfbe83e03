use anyhow::Result;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the Google Books volumes API.
    pub google_books_url: String,
    /// Base URL of the Open Library search API.
    pub open_library_url: String,
    /// Per-request timeout for both remote catalogs, in seconds.
    pub request_timeout_secs: u64,
    /// `langRestrict` value sent to Google Books.
    pub language: String,
}

pub const GOOGLE_BOOKS_API_BASE: &str = "https://www.googleapis.com/books/v1";
pub const OPEN_LIBRARY_API_BASE: &str = "https://openlibrary.org";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LANGUAGE: &str = "es";

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            google_books_url: GOOGLE_BOOKS_API_BASE.to_string(),
            open_library_url: OPEN_LIBRARY_API_BASE.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            catalog: CatalogConfig {
                google_books_url: env::var("BIBLIOFIND_GOOGLE_BOOKS_URL")
                    .unwrap_or_else(|_| GOOGLE_BOOKS_API_BASE.to_string()),
                open_library_url: env::var("BIBLIOFIND_OPEN_LIBRARY_URL")
                    .unwrap_or_else(|_| OPEN_LIBRARY_API_BASE.to_string()),
                request_timeout_secs: env::var("BIBLIOFIND_TIMEOUT_SECS")
                    .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
                    .parse()?,
                language: env::var("BIBLIOFIND_LANG")
                    .unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string()),
            },
        })
    }
}
