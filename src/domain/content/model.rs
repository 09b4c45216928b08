use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Where a record was ingested from. Set once at ingestion, never rewritten.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Community,
    Generated,
    Curated,
}

impl ContentSource {
    pub fn display_name(&self) -> &'static str {
        match self {
            ContentSource::Community => "Community",
            ContentSource::Generated => "AI Generated",
            ContentSource::Curated => "Curated Vault",
        }
    }
}

/// Canonical normalized content card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<i64>,
    pub source: ContentSource,
    pub is_trending: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ContentRecord {
    /// Minimal record; optional attributes start empty.
    pub fn new(id: impl Into<String>, title: impl Into<String>, source: ContentSource) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            caption: None,
            image_url: None,
            post_url: None,
            author: None,
            tags: Vec::new(),
            popularity: None,
            source,
            is_trending: false,
            timestamp: None,
        }
    }

    /// Key used to decide whether two records point at the same content.
    /// Priority: post URL, then image URL, then id.
    pub fn dedup_key(&self) -> &str {
        self.post_url
            .as_ref()
            .map(Url::as_str)
            .filter(|s| !s.is_empty())
            .or_else(|| {
                self.image_url
                    .as_ref()
                    .map(Url::as_str)
                    .filter(|s| !s.is_empty())
            })
            .unwrap_or(self.id.as_str())
    }

    /// Popularity used for ranking; absent counts as zero.
    pub fn rank_score(&self) -> i64 {
        self.popularity.unwrap_or(0)
    }

    pub fn with_trending(self, is_trending: bool) -> Self {
        Self {
            is_trending,
            ..self
        }
    }
}

/// Which collection an aggregation call is building
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    Trending,
    Discovery,
}

impl FeedKind {
    /// Inclusive upper bound a request limit is clamped to
    pub fn max_limit(&self) -> usize {
        match self {
            FeedKind::Trending => 40,
            FeedKind::Discovery => 60,
        }
    }
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedKind::Trending => write!(f, "trending"),
            FeedKind::Discovery => write!(f, "discovery"),
        }
    }
}

/// Input to the aggregator. The limit is always within `1..=kind.max_limit()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedRequest {
    pub kind: FeedKind,
    pub limit: usize,
}

impl FeedRequest {
    pub fn new(kind: FeedKind, limit: usize) -> Self {
        Self {
            kind,
            limit: limit.clamp(1, kind.max_limit()),
        }
    }
}
