use super::alias::parse_web_url;
use crate::domain::content::{ContentProvider, ContentRecord, ContentSource, ProviderError};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_COMMUNITY_BASE_URL: &str = "https://meme-api.com/gimme";

/// The community API serves at most this many posts per call
const MAX_COUNT: usize = 50;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommunityPost {
    post_link: String,
    subreddit: String,
    title: String,
    url: String,
    author: String,
    ups: i64,
}

impl CommunityPost {
    fn into_record(self) -> Option<ContentRecord> {
        let post_url = parse_web_url(&self.post_link)?;
        let id = self.post_link.trim().to_string();

        Some(ContentRecord {
            id,
            title: self.title,
            caption: Some(capitalize_words(&self.subreddit)),
            image_url: parse_web_url(&self.url),
            post_url: Some(post_url),
            author: Some(self.author),
            tags: vec![self.subreddit],
            popularity: Some(self.ups),
            source: ContentSource::Community,
            is_trending: false,
            timestamp: None,
        })
    }
}

fn capitalize_words(s: &str) -> String {
    s.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Decode either a single post or a `{count, memes: [...]}` wrapper.
/// Posts that fail to decode are dropped; an unparseable body fails the call.
pub fn decode_community(body: &[u8]) -> Result<Vec<ContentRecord>, ProviderError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ProviderError::Decoding(e.to_string()))?;

    let items = match value {
        Value::Object(mut object) => match object.remove("memes") {
            Some(Value::Array(items)) => items,
            Some(Value::Null) => Vec::new(),
            Some(other) => {
                return Err(ProviderError::Decoding(format!(
                    "expected `memes` to be an array, got {}",
                    json_type(&other)
                )))
            }
            None => vec![Value::Object(object)],
        },
        Value::Array(items) => items,
        other => {
            return Err(ProviderError::Decoding(format!(
                "expected an object, got {}",
                json_type(&other)
            )))
        }
    };

    let total = items.len();
    let records: Vec<ContentRecord> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<CommunityPost>(item) {
            Ok(post) => post.into_record(),
            Err(e) => {
                tracing::debug!(error = %e, "Dropping undecodable community post");
                None
            }
        })
        .collect();

    if records.len() < total {
        tracing::debug!(
            dropped = total - records.len(),
            kept = records.len(),
            "Community response contained malformed posts"
        );
    }

    Ok(records)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Client for the public community meme feed
pub struct CommunityClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl CommunityClient {
    pub fn new(base_url: String, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    fn endpoint(&self, count: usize) -> String {
        format!("{}/{}", self.base_url, count)
    }
}

#[async_trait]
impl ContentProvider for CommunityClient {
    fn name(&self) -> &str {
        "community"
    }

    fn source(&self) -> ContentSource {
        ContentSource::Community
    }

    async fn fetch(&self, limit: usize) -> Result<Vec<ContentRecord>, ProviderError> {
        let count = limit.clamp(1, MAX_COUNT);
        let url = self.endpoint(count);

        tracing::debug!(url = %url, count = count, "Fetching community posts");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(ProviderError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::BadStatusCode(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(ProviderError::from_transport)?;

        decode_community(&body)
    }
}
