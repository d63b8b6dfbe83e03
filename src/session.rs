// Per-session state: bounded search history and query helpers.
// One session per caller; history is most-recent-first, capped.

use chrono::Local;

use crate::resolver::{Mode, Resolver};
use crate::types::{LookupResult, SearchRecord};

/// Maximum number of records kept in the history.
pub const HISTORY_LIMIT: usize = 10;

/// Minimum word length considered interesting for suggestions.
const SUGGESTION_MIN_LEN: usize = 3;

/// How many leading words of the query are considered for suggestions.
const SUGGESTION_MAX_TERMS: usize = 3;

/// Explicit session object owning the search history. No globals; callers
/// create one per logical user session and thread it through their calls.
#[derive(Debug, Default)]
pub struct Session {
    history: Vec<SearchRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `title` and record the outcome; returns the new head record.
    pub async fn search(&mut self, resolver: &Resolver, title: &str, mode: Mode) -> &SearchRecord {
        let results = resolver.resolve(title, mode).await;
        self.record(title, results);
        &self.history[0]
    }

    /// Prepend a timestamped record, evicting the oldest beyond the cap.
    pub fn record(&mut self, queried_title: &str, results: Vec<LookupResult>) {
        let record = SearchRecord {
            queried_title: queried_title.to_string(),
            results,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };
        self.history.insert(0, record);
        self.history.truncate(HISTORY_LIMIT);
    }

    /// Past searches, most recent first. Never longer than [`HISTORY_LIMIT`].
    pub fn history(&self) -> &[SearchRecord] {
        &self.history
    }

    pub fn last_query(&self) -> Option<&str> {
        self.history.first().map(|r| r.queried_title.as_str())
    }
}

/// Alternative search terms derived from a query: the first few words long
/// enough to stand on their own, for the "you could also search" chips.
pub fn suggested_terms(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .take(SUGGESTION_MAX_TERMS)
        .filter(|word| word.chars().count() > SUGGESTION_MIN_LEN)
        .map(str::to_string)
        .collect()
}
