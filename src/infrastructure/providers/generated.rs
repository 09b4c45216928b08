use super::alias::FieldAliases;
use crate::domain::content::{ContentProvider, ContentRecord, ContentSource, ProviderError};
use async_trait::async_trait;
use serde_json::{Map, Value};

pub const DEFAULT_GENERATED_BASE_URL: &str = "https://api.memeverse.ai/v1/memes";

/// The generative API serves at most this many items per call
const MAX_LIMIT: usize = 40;

/// Wrapper keys the item array may be nested under, in priority order
const WRAPPER_KEYS: &[&str] = &["items", "data"];

const ID: FieldAliases = FieldAliases(&["id", "uuid"]);
const TITLE: FieldAliases = FieldAliases(&["title", "name"]);
const IMAGE_URL: FieldAliases = FieldAliases(&["image_url", "imageUrl", "url"]);
const SHARE_URL: FieldAliases = FieldAliases(&["share_url", "permalink"]);
const CAPTION: FieldAliases = FieldAliases(&["caption", "text", "prompt"]);
const POPULARITY: FieldAliases = FieldAliases(&["likes", "upvotes", "score"]);
const CREATED_AT: FieldAliases = FieldAliases(&["created_at", "createdAt"]);
const AUTHOR: FieldAliases = FieldAliases(&["author", "creator"]);
const TAGS: FieldAliases = FieldAliases(&["tags"]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratedEndpoint {
    Trending,
    Latest,
}

impl GeneratedEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            GeneratedEndpoint::Trending => "trending",
            GeneratedEndpoint::Latest => "latest",
        }
    }
}

/// Normalize one generated item. Returns `None` when the item has no usable
/// image or no title/caption to show.
fn normalize_item(item: &Map<String, Value>) -> Option<ContentRecord> {
    let image_url = IMAGE_URL.url(item)?;
    let caption = CAPTION.text(item);
    let title = TITLE.text(item).or_else(|| caption.clone())?;
    let post_url = SHARE_URL.url(item);

    // Items without an id are keyed by their most stable link
    let id = ID
        .text(item)
        .or_else(|| ID.integer(item).map(|n| n.to_string()))
        .unwrap_or_else(|| {
            post_url
                .as_ref()
                .unwrap_or(&image_url)
                .as_str()
                .to_string()
        });

    Some(ContentRecord {
        id,
        title,
        caption,
        image_url: Some(image_url),
        post_url,
        author: AUTHOR.text(item),
        tags: TAGS.string_list(item),
        popularity: POPULARITY.integer(item),
        source: ContentSource::Generated,
        is_trending: false,
        timestamp: CREATED_AT.timestamp(item),
    })
}

/// Decode a bare array, an object wrapping the array under a known key, or a
/// single item object. Items that fail to normalize are dropped.
pub fn decode_generated(body: &[u8]) -> Result<Vec<ContentRecord>, ProviderError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ProviderError::Decoding(e.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut object) => {
            let wrapped = WRAPPER_KEYS
                .iter()
                .find(|key| object.get(**key).is_some_and(Value::is_array))
                .and_then(|key| object.remove(*key));
            match wrapped {
                Some(Value::Array(items)) => items,
                _ => vec![Value::Object(object)],
            }
        }
        _ => {
            return Err(ProviderError::Decoding(
                "expected an array or object of generated items".to_string(),
            ))
        }
    };

    let total = items.len();
    let records: Vec<ContentRecord> = items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(normalize_item)
        .collect();

    if records.len() < total {
        tracing::debug!(
            dropped = total - records.len(),
            kept = records.len(),
            "Generated response contained unusable items"
        );
    }

    Ok(records)
}

/// Client for the generative content API (bearer-token authenticated)
pub struct GeneratedClient {
    base_url: String,
    api_token: Option<String>,
    endpoint: GeneratedEndpoint,
    http_client: reqwest::Client,
}

impl GeneratedClient {
    pub fn new(
        base_url: String,
        api_token: Option<String>,
        endpoint: GeneratedEndpoint,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.filter(|t| !t.trim().is_empty()),
            endpoint,
            http_client,
        }
    }

    fn endpoint_url(&self) -> String {
        format!("{}/{}", self.base_url, self.endpoint.path())
    }
}

#[async_trait]
impl ContentProvider for GeneratedClient {
    fn name(&self) -> &str {
        match self.endpoint {
            GeneratedEndpoint::Trending => "generated-trending",
            GeneratedEndpoint::Latest => "generated-latest",
        }
    }

    fn source(&self) -> ContentSource {
        ContentSource::Generated
    }

    fn is_configured(&self) -> bool {
        self.api_token.is_some()
    }

    async fn fetch(&self, limit: usize) -> Result<Vec<ContentRecord>, ProviderError> {
        let token = self
            .api_token
            .as_deref()
            .ok_or(ProviderError::MissingCredential)?;
        let limit = limit.clamp(1, MAX_LIMIT);
        let url = self.endpoint_url();

        tracing::debug!(url = %url, limit = limit, "Fetching generated items");

        let response = self
            .http_client
            .get(&url)
            .query(&[("limit", limit)])
            .header("Authorization", format!("Bearer {}", token))
            .header("Accept", "application/json")
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

        decode_generated(&body)
    }
}
