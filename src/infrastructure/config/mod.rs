use crate::domain::feed::DEFAULT_TRENDING_THRESHOLD;
use crate::domain::session::SessionSettings;
use crate::infrastructure::providers::{DEFAULT_COMMUNITY_BASE_URL, DEFAULT_GENERATED_BASE_URL};
use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Providers
    pub community_base_url: String,
    pub generated_base_url: String,
    pub generated_api_token: Option<String>,
    pub http_timeout_secs: u64,
    // Feed policy
    pub trending_limit: usize,
    pub discovery_limit: usize,
    pub trending_popularity_threshold: i64,
    pub discovery_shuffle: bool,
    pub curated_shuffle: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 8080)?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            community_base_url: env::var("COMMUNITY_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_COMMUNITY_BASE_URL.to_string()),
            generated_base_url: env::var("GENERATED_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GENERATED_BASE_URL.to_string()),
            generated_api_token: env::var("GENERATED_API_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
            http_timeout_secs: parse_var("HTTP_TIMEOUT_SECS", 15)?,
            trending_limit: parse_var("TRENDING_LIMIT", 12)?,
            discovery_limit: parse_var("DISCOVERY_LIMIT", 24)?,
            trending_popularity_threshold: parse_var(
                "TRENDING_POPULARITY_THRESHOLD",
                DEFAULT_TRENDING_THRESHOLD,
            )?,
            discovery_shuffle: flag_var("DISCOVERY_SHUFFLE", false),
            curated_shuffle: flag_var("CURATED_SHUFFLE", true),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            trending_limit: self.trending_limit,
            discovery_limit: self.discovery_limit,
            shuffle_curated: self.curated_shuffle,
        }
    }
}

/// Parse an optional variable, failing on a present but malformed value
fn parse_var<T>(name: &str, default: T) -> Result<T, Box<dyn std::error::Error>>
where
    T: FromStr,
    T::Err: std::error::Error + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| format!("invalid {}={:?}: {}", name, raw, e).into()),
        Err(_) => Ok(default),
    }
}

fn flag_var(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|s| matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(default)
}
