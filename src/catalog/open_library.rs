// Open Library client (catalog B)
// API Reference: https://openlibrary.org/dev/docs/api/search

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::catalog::{CatalogAdapter, CatalogError};
use crate::config::{CatalogConfig, DEFAULT_TIMEOUT_SECS, OPEN_LIBRARY_API_BASE};
use crate::types::{LookupResult, Source, UNKNOWN_YEAR};

pub struct OpenLibraryClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

// Response types for the search endpoint.
#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<Doc>,
}

#[derive(Deserialize)]
struct Doc {
    author_name: Option<AuthorName>,
    title: Option<String>,
    first_publish_year: Option<i64>,
}

// The author field comes back as either a single string or a list of names.
#[derive(Deserialize)]
#[serde(untagged)]
enum AuthorName {
    One(String),
    Many(Vec<String>),
}

impl AuthorName {
    fn joined(&self) -> String {
        match self {
            AuthorName::One(name) => name.clone(),
            AuthorName::Many(names) => names.join(", "),
        }
    }
}

impl OpenLibraryClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: OPEN_LIBRARY_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.open_library_url.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// Point the client at a different endpoint (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for OpenLibraryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogAdapter for OpenLibraryClient {
    fn source(&self) -> Source {
        Source::OpenLibrary
    }

    async fn query(&self, title: &str) -> Result<LookupResult, CatalogError> {
        let url = format!("{}/search.json", self.base_url);

        info!(query = %title, "querying Open Library");

        let response = self
            .client
            .get(&url)
            .query(&[("title", title), ("limit", "1")])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let body: SearchResponse = response.json().await?;

        let doc = body.docs.first().ok_or(CatalogError::NoMatch)?;

        let author = doc
            .author_name
            .as_ref()
            .map(AuthorName::joined)
            .unwrap_or_default();
        if author.is_empty() {
            return Err(CatalogError::NoMatch);
        }

        debug!(matched = ?doc.title, "Open Library hit");

        let year = doc
            .first_publish_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| UNKNOWN_YEAR.to_string());

        Ok(LookupResult::hit(
            Source::OpenLibrary,
            author,
            doc.title.clone().unwrap_or_default(),
            year,
        ))
    }
}
