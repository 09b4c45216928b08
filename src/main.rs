use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use cardstream_backend::controllers::{curated::CuratedController, feed::FeedController};
use cardstream_backend::domain::content::{ContentProvider, CuratedRepository};
use cardstream_backend::domain::feed::{FeedService, FeedServiceApi};
use cardstream_backend::domain::session::SessionController;
use cardstream_backend::infrastructure::config::{Config, LogFormat};
use cardstream_backend::infrastructure::http::start_http_server;
use cardstream_backend::infrastructure::providers::{
    build_http_client, CommunityClient, GeneratedClient, GeneratedEndpoint,
};
use cardstream_backend::infrastructure::repositories::HardcodedCuratedRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        development = config.is_development(),
        "Starting Cardstream Backend on {}:{}",
        config.host,
        config.port
    );

    if config.generated_api_token.is_none() {
        tracing::warn!("GENERATED_API_TOKEN not set, generated feeds will be skipped");
    }

    let config = Arc::new(config);
    let http_client = build_http_client(config.http_timeout())?;

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate providers and repositories
    tracing::info!("Instantiating providers...");
    let community: Arc<dyn ContentProvider> = Arc::new(CommunityClient::new(
        config.community_base_url.clone(),
        http_client.clone(),
    ));
    let generated_trending: Arc<dyn ContentProvider> = Arc::new(GeneratedClient::new(
        config.generated_base_url.clone(),
        config.generated_api_token.clone(),
        GeneratedEndpoint::Trending,
        http_client.clone(),
    ));
    let generated_latest: Arc<dyn ContentProvider> = Arc::new(GeneratedClient::new(
        config.generated_base_url.clone(),
        config.generated_api_token.clone(),
        GeneratedEndpoint::Latest,
        http_client,
    ));
    let curated_repo: Arc<dyn CuratedRepository> = Arc::new(HardcodedCuratedRepository::new());

    // 2. Instantiate services
    tracing::info!("Instantiating services...");
    let feed_service: Arc<dyn FeedServiceApi> = Arc::new(FeedService::with_default_policy(
        community,
        generated_trending,
        generated_latest,
        config.trending_popularity_threshold,
        config.discovery_shuffle,
    ));
    let session = Arc::new(SessionController::new(
        feed_service,
        curated_repo.clone(),
        config.session_settings(),
    ));

    // 3. Instantiate controllers
    tracing::info!("Instantiating controllers...");
    let feed_controller = Arc::new(FeedController::new(session.clone()));
    let curated_controller = Arc::new(CuratedController::new(curated_repo));

    // First load runs in the background while the server comes up
    session.boot();

    start_http_server(config, feed_controller, curated_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cardstream_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
