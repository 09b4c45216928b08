use cardstream_backend::infrastructure::config::{Config, Environment, LogFormat};
use serial_test::serial;
use std::env;

const VARS: &[&str] = &[
    "HOST",
    "PORT",
    "ENVIRONMENT",
    "LOG_FORMAT",
    "COMMUNITY_BASE_URL",
    "GENERATED_BASE_URL",
    "GENERATED_API_TOKEN",
    "HTTP_TIMEOUT_SECS",
    "TRENDING_LIMIT",
    "DISCOVERY_LIMIT",
    "TRENDING_POPULARITY_THRESHOLD",
    "DISCOVERY_SHUFFLE",
    "CURATED_SHUFFLE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn config_uses_defaults_when_unset() {
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8080);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert_eq!(config.community_base_url, "https://meme-api.com/gimme");
    assert_eq!(config.generated_base_url, "https://api.memeverse.ai/v1/memes");
    assert_eq!(config.http_timeout_secs, 15);
    assert_eq!(config.trending_limit, 12);
    assert_eq!(config.discovery_limit, 24);
    assert_eq!(config.trending_popularity_threshold, 5000);
    assert!(!config.discovery_shuffle);
    assert!(config.curated_shuffle);
}

#[test]
#[serial]
fn config_reads_overrides() {
    clear_env();
    env::set_var("PORT", "9090");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("GENERATED_API_TOKEN", "abc");
    env::set_var("TRENDING_LIMIT", "20");
    env::set_var("DISCOVERY_SHUFFLE", "true");
    env::set_var("CURATED_SHUFFLE", "false");

    let config = Config::from_env().unwrap();
    clear_env();

    assert_eq!(config.port, 9090);
    assert!(!config.is_development());
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.generated_api_token.as_deref(), Some("abc"));
    assert!(config.discovery_shuffle);

    let settings = config.session_settings();
    assert_eq!(settings.trending_limit, 20);
    assert_eq!(settings.discovery_limit, 24);
    assert!(!settings.shuffle_curated);
}

#[test]
#[serial]
fn config_treats_blank_token_as_missing() {
    clear_env();
    env::set_var("GENERATED_API_TOKEN", "   ");

    let config = Config::from_env().unwrap();
    clear_env();

    assert!(config.generated_api_token.is_none());
}

#[test]
#[serial]
fn config_rejects_malformed_numbers() {
    clear_env();
    env::set_var("DISCOVERY_LIMIT", "lots");

    let result = Config::from_env();
    clear_env();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("DISCOVERY_LIMIT"));
}
