use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use url::Url;

/// Unix timestamps above this are taken to be milliseconds
const MILLIS_CUTOFF: i64 = 100_000_000_000;

/// Ordered key aliases for one logical field. The first alias holding a
/// usable, non-empty value wins.
#[derive(Debug, Clone, Copy)]
pub struct FieldAliases(pub &'static [&'static str]);

impl FieldAliases {
    fn values<'a>(&self, item: &'a Map<String, Value>) -> impl Iterator<Item = &'a Value> + 'a {
        let keys = self.0;
        keys.iter().filter_map(move |key| item.get(*key))
    }

    pub fn text(&self, item: &Map<String, Value>) -> Option<String> {
        self.values(item).find_map(|value| match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        })
    }

    /// Integer or numeric string
    pub fn integer(&self, item: &Map<String, Value>) -> Option<i64> {
        self.values(item).find_map(|value| match value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    /// Absolute http(s) URL
    pub fn url(&self, item: &Map<String, Value>) -> Option<Url> {
        self.values(item).find_map(|value| match value {
            Value::String(s) => parse_web_url(s),
            _ => None,
        })
    }

    /// RFC 3339 string or unix seconds/milliseconds
    pub fn timestamp(&self, item: &Map<String, Value>) -> Option<DateTime<Utc>> {
        self.values(item).find_map(|value| match value {
            Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            Value::Number(n) => n.as_i64().and_then(|raw| {
                if raw > MILLIS_CUTOFF {
                    DateTime::<Utc>::from_timestamp_millis(raw)
                } else {
                    DateTime::<Utc>::from_timestamp(raw, 0)
                }
            }),
            _ => None,
        })
    }

    /// Array of non-empty strings, deduplicated in order
    pub fn string_list(&self, item: &Map<String, Value>) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        if let Some(Value::Array(values)) = self.values(item).find(|v| v.is_array()) {
            for value in values {
                if let Value::String(s) = value {
                    let s = s.trim();
                    if !s.is_empty() && !out.iter().any(|existing| existing == s) {
                        out.push(s.to_string());
                    }
                }
            }
        }
        out
    }
}

pub fn parse_web_url(raw: &str) -> Option<Url> {
    Url::parse(raw.trim())
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}
