// Google Books client (catalog A)
// API Reference: https://developers.google.com/books/docs/v1/using

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::catalog::{CatalogAdapter, CatalogError};
use crate::config::{CatalogConfig, DEFAULT_LANGUAGE, DEFAULT_TIMEOUT_SECS, GOOGLE_BOOKS_API_BASE};
use crate::types::{LookupResult, Source, UNKNOWN_YEAR};

pub struct GoogleBooksClient {
    client: Client,
    base_url: String,
    language: String,
    timeout: Duration,
}

// Response types for the volumes endpoint. Every field is optional on the
// wire; absence must stay distinguishable from an empty string.
#[derive(Deserialize)]
struct VolumesResponse {
    items: Option<Vec<Volume>>,
}

#[derive(Deserialize)]
struct Volume {
    #[serde(rename = "volumeInfo")]
    volume_info: VolumeInfo,
}

#[derive(Deserialize, Default)]
struct VolumeInfo {
    authors: Option<Vec<String>>,
    title: Option<String>,
    #[serde(rename = "publishedDate")]
    published_date: Option<String>,
}

impl GoogleBooksClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: GOOGLE_BOOKS_API_BASE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.google_books_url.clone(),
            language: config.language.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// Point the client at a different endpoint (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// First 4 characters of the published date ("2004-05-11" -> "2004").
    fn extract_year(published_date: Option<&str>) -> String {
        match published_date {
            Some(date) if !date.is_empty() => date.chars().take(4).collect(),
            _ => UNKNOWN_YEAR.to_string(),
        }
    }
}

impl Default for GoogleBooksClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogAdapter for GoogleBooksClient {
    fn source(&self) -> Source {
        Source::GoogleBooks
    }

    async fn query(&self, title: &str) -> Result<LookupResult, CatalogError> {
        let url = format!("{}/volumes", self.base_url);

        info!(query = %title, "querying Google Books");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", format!("intitle:{title}").as_str()),
                ("maxResults", "1"),
                ("langRestrict", self.language.as_str()),
            ])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let body: VolumesResponse = response.json().await?;

        let volume = body
            .items
            .as_deref()
            .and_then(|items| items.first())
            .ok_or(CatalogError::NoMatch)?;
        let info = &volume.volume_info;

        let authors = info.authors.as_deref().unwrap_or_default();
        if authors.is_empty() {
            return Err(CatalogError::NoMatch);
        }

        debug!(matched = ?info.title, "Google Books hit");

        Ok(LookupResult::hit(
            Source::GoogleBooks,
            authors.join(", "),
            info.title.clone().unwrap_or_default(),
            Self::extract_year(info.published_date.as_deref()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::ServerGuard) -> GoogleBooksClient {
        GoogleBooksClient::new().with_base_url(server.url())
    }

    #[test]
    fn year_is_first_four_chars_of_published_date() {
        assert_eq!(GoogleBooksClient::extract_year(Some("1967-05-30")), "1967");
        assert_eq!(GoogleBooksClient::extract_year(Some("1967")), "1967");
        assert_eq!(GoogleBooksClient::extract_year(Some("")), "Unknown");
        assert_eq!(GoogleBooksClient::extract_year(None), "Unknown");
    }

    #[tokio::test]
    async fn parses_a_full_volume() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/volumes")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("q".into(), "intitle:Rayuela".into()),
                mockito::Matcher::UrlEncoded("maxResults".into(), "1".into()),
                mockito::Matcher::UrlEncoded("langRestrict".into(), "es".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"items":[{"volumeInfo":{
                    "title":"Rayuela",
                    "authors":["Julio Cortázar"],
                    "publishedDate":"1963-06-28"
                }}]}"#,
            )
            .create_async()
            .await;

        let result = client_for(&server).lookup("Rayuela").await;

        mock.assert_async().await;
        assert!(result.found);
        assert_eq!(result.author.as_deref(), Some("Julio Cortázar"));
        assert_eq!(result.matched_title.as_deref(), Some("Rayuela"));
        assert_eq!(result.year.as_deref(), Some("1963"));
        assert_eq!(result.source, Source::GoogleBooks);
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn joins_multiple_authors() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/volumes")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{"items":[{"volumeInfo":{
                    "title":"Good Omens",
                    "authors":["Terry Pratchett","Neil Gaiman"]
                }}]}"#,
            )
            .create_async()
            .await;

        let result = client_for(&server).lookup("Good Omens").await;
        assert!(result.found);
        assert_eq!(result.author.as_deref(), Some("Terry Pratchett, Neil Gaiman"));
        // No publishedDate in the item.
        assert_eq!(result.year.as_deref(), Some("Unknown"));
    }

    #[tokio::test]
    async fn empty_items_is_a_quiet_miss() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/volumes")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"items":[]}"#)
            .create_async()
            .await;

        let result = client_for(&server).lookup("nothing").await;
        assert!(!result.found);
        assert!(result.error.is_none());
        assert_eq!(result.source, Source::GoogleBooks);
    }

    #[tokio::test]
    async fn missing_authors_is_a_quiet_miss() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/volumes")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"items":[{"volumeInfo":{"title":"Anonymous work"}}]}"#)
            .create_async()
            .await;

        let result = client_for(&server).lookup("anonymous").await;
        assert!(!result.found);
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn server_error_is_a_quiet_miss() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/volumes")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let result = client_for(&server).lookup("anything").await;
        assert!(!result.found);
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn transport_failure_carries_a_diagnostic() {
        // Nothing listens on this port; the connect error must surface in
        // the error field rather than escape as an Err.
        let client = GoogleBooksClient::new().with_base_url("http://127.0.0.1:9");

        let result = client.lookup("anything").await;
        assert!(!result.found);
        assert!(result.error.is_some());
        assert_eq!(result.source, Source::GoogleBooks);
    }

    #[tokio::test]
    async fn malformed_body_carries_a_diagnostic() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/volumes")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("not json at all")
            .create_async()
            .await;

        let result = client_for(&server).lookup("anything").await;
        assert!(!result.found);
        assert!(result.error.is_some());
    }
}
