//! Path to entry resolution
//!
//! Lookups go through a routing table keyed by the exact short code. A code
//! never matches another code it merely ends with.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::errors::{LinkshelfError, Result};
use crate::storage::Entry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Empty path, rendered by the presentation layer without a lookup.
    Home,
    Lookup(String),
}

impl Route {
    /// Accepts a bare path (`/abc123`), a path with query or fragment, or a
    /// full short URL.
    pub fn parse(path: &str) -> Self {
        let path = match path.find("://") {
            Some(idx) => {
                let rest = &path[idx + 3..];
                rest.find('/').map(|slash| &rest[slash..]).unwrap_or("")
            }
            None => path,
        };

        let path = path.split(['?', '#']).next().unwrap_or_default();
        // Only one slash belongs to the route; an alias may itself start with '/'.
        let code = path.strip_prefix('/').unwrap_or(path);

        if code.is_empty() {
            Route::Home
        } else {
            Route::Lookup(code.to_string())
        }
    }
}

pub struct RoutingTable<'a> {
    routes: HashMap<&'a str, &'a Entry>,
}

impl<'a> RoutingTable<'a> {
    /// `history` is newest first, so the first entry seen for a code wins.
    pub fn from_history(history: &'a [Entry]) -> Self {
        let mut routes = HashMap::with_capacity(history.len());
        for entry in history {
            routes.entry(entry.short_code()).or_insert(entry);
        }
        Self { routes }
    }

    pub fn resolve(&self, code: &str) -> Result<&'a Entry> {
        self.routes
            .get(code)
            .copied()
            .ok_or_else(|| LinkshelfError::not_found(code))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[instrument(skip(history), fields(entries = history.len()))]
pub fn resolve<'a>(code: &str, history: &'a [Entry]) -> Result<&'a Entry> {
    let result = RoutingTable::from_history(history).resolve(code);
    if result.is_err() {
        debug!("No history entry for code: {}", code);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(id: i64, code: &str, target: &str) -> Entry {
        Entry::new(
            id,
            target,
            format!("http://localhost:8080/{}", code),
            Utc::now(),
            None,
        )
    }

    #[test]
    fn test_route_parse() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/?utm=1"), Route::Home);
        assert_eq!(Route::parse("my-link"), Route::Lookup("my-link".into()));
        assert_eq!(Route::parse("/my-link"), Route::Lookup("my-link".into()));
        assert_eq!(Route::parse("/abc123?x=1#top"), Route::Lookup("abc123".into()));
        assert_eq!(
            Route::parse("http://localhost:8080/abc123"),
            Route::Lookup("abc123".into())
        );
        assert_eq!(Route::parse("https://sho.rt"), Route::Home);
    }

    #[test]
    fn test_route_parse_keeps_inner_slashes() {
        assert_eq!(Route::parse("//x"), Route::Lookup("/x".into()));
        assert_eq!(Route::parse("/a/b"), Route::Lookup("a/b".into()));
        assert_eq!(
            Route::parse("http://localhost:8080//x"),
            Route::Lookup("/x".into())
        );
    }

    #[test]
    fn test_exact_match_only() {
        let history = vec![entry(1, "my-link", "https://a.io")];
        assert!(resolve("my-link", &history).is_ok());
        assert!(matches!(
            resolve("link", &history),
            Err(LinkshelfError::NotFound(_))
        ));
        assert!(resolve("8080/my-link", &history).is_err());
    }

    #[test]
    fn test_newest_entry_wins() {
        let history = vec![
            entry(2, "dup", "https://newer.io"),
            entry(1, "dup", "https://older.io"),
        ];
        let table = RoutingTable::from_history(&history);
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve("dup").unwrap().original_url, "https://newer.io");
    }

    #[test]
    fn test_empty_history() {
        assert!(matches!(
            resolve("does-not-exist", &[]),
            Err(LinkshelfError::NotFound(code)) if code == "does-not-exist"
        ));
    }
}
