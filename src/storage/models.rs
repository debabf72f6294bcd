use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// 历史记录容量上限
pub const HISTORY_CAPACITY: usize = 5;

/// One short-code to original-URL mapping.
///
/// The serialized layout is exactly `{id, originalUrl, shortUrl, createdAt, expiry}`;
/// the short code is derived from `short_url` rather than stored twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: i64,
    pub original_url: String,
    pub short_url: String,
    pub created_at: String,
    #[serde(default)]
    pub expiry: String,
}

/// Newest first, never longer than [`HISTORY_CAPACITY`].
pub type History = Vec<Entry>;

impl Entry {
    pub fn new(
        id: i64,
        original_url: impl Into<String>,
        short_url: impl Into<String>,
        created_at: DateTime<Utc>,
        expiry: Option<String>,
    ) -> Self {
        Self {
            id,
            original_url: original_url.into(),
            short_url: short_url.into(),
            created_at: format_timestamp(created_at),
            expiry: expiry.unwrap_or_default(),
        }
    }

    /// Everything after the first `/` following the scheme separator.
    pub fn short_code(&self) -> &str {
        let rest = match self.short_url.find("://") {
            Some(idx) => &self.short_url[idx + 3..],
            None => self.short_url.as_str(),
        };
        match rest.find('/') {
            Some(idx) => &rest[idx + 1..],
            None => "",
        }
    }

    /// 过期时间（仅存储，不参与解析）
    pub fn expiry(&self) -> Option<&str> {
        if self.expiry.is_empty() {
            None
        } else {
            Some(&self.expiry)
        }
    }

    pub fn created_at_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(short_url: &str) -> Entry {
        Entry::new(
            1,
            "https://example.com/page",
            short_url,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            None,
        )
    }

    #[test]
    fn test_short_code_derivation() {
        assert_eq!(entry("http://localhost:8080/abc123").short_code(), "abc123");
        assert_eq!(entry("https://sho.rt/my-link").short_code(), "my-link");
        assert_eq!(entry("https://sho.rt/a/b").short_code(), "a/b");
        assert_eq!(entry("https://sho.rt").short_code(), "");
    }

    #[test]
    fn test_serialized_layout() {
        let json = serde_json::to_string(&entry("https://sho.rt/abc123")).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"originalUrl":"https://example.com/page","shortUrl":"https://sho.rt/abc123","createdAt":"2024-05-01T12:00:00.000Z","expiry":""}"#
        );
    }

    #[test]
    fn test_missing_expiry_defaults_to_empty() {
        let json = r#"{"id":7,"originalUrl":"https://a.io","shortUrl":"https://sho.rt/x","createdAt":"2024-05-01T12:00:00.000Z"}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.expiry(), None);
        assert!(entry.created_at_datetime().is_some());
    }

    #[test]
    fn test_expiry_is_kept_verbatim() {
        let e = Entry::new(
            2,
            "https://a.io",
            "https://sho.rt/x",
            Utc::now(),
            Some("2030-01-01".into()),
        );
        assert_eq!(e.expiry(), Some("2030-01-01"));
    }
}
