pub mod alias;
pub mod community;
pub mod generated;

pub use community::{decode_community, CommunityClient, DEFAULT_COMMUNITY_BASE_URL};
pub use generated::{decode_generated, GeneratedClient, GeneratedEndpoint, DEFAULT_GENERATED_BASE_URL};

use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for all provider calls
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}
