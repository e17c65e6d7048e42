mod utils;

use std::fs;

use slope_ski_sdk::config::{Config, NetworkConstants, SlopeNetworkConfig, TokenInfo};
use utils::test_utils::init_test_env;

#[test]
fn test_network_constants_loading_and_env_override() {
    init_test_env();

    // The shipped config/network.toml defines the named networks
    let network = NetworkConstants::load("local").expect("local network constants");
    assert_eq!(network.network_name, "local");
    assert!(!network.default_api_url.is_empty());
    assert!(network.request_timeout_secs > 0);
    assert_eq!(network.default_from_token.as_deref(), Some("BTC"));
    assert_eq!(network.default_to_token.as_deref(), Some("USDT"));

    assert!(NetworkConstants::load("no-such-network").is_err());

    // SLOPE_CONFIG_DIR redirects loading to another directory. The env
    // var is process-global, so the override check lives in this same
    // test rather than racing a parallel one.
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("network.toml"),
        r#"
[staging]
network_name = "staging"
default_api_url = "http://127.0.0.1:4000"
request_timeout_secs = 3
default_from_token = "ETH"
default_to_token = "USDC"
"#,
    )
    .expect("write network.toml");

    std::env::set_var("SLOPE_CONFIG_DIR", dir.path());
    let staging = NetworkConstants::load("staging");
    std::env::remove_var("SLOPE_CONFIG_DIR");

    let staging = staging.expect("staging network constants");
    assert_eq!(staging.network_name, "staging");
    assert_eq!(staging.default_api_url, "http://127.0.0.1:4000");
    assert_eq!(staging.default_from_token.as_deref(), Some("ETH"));
}

#[test]
fn test_network_config_from_constants() {
    init_test_env();

    let constants = NetworkConstants::new(
        "local".to_string(),
        "http://127.0.0.1:3000".to_string(),
        10,
        Some("BTC".to_string()),
        Some("USDT".to_string()),
    );

    let config = SlopeNetworkConfig::from_constants(&constants);
    assert_eq!(config.network_name, "local");
    assert_eq!(config.api_url, "http://127.0.0.1:3000");
    assert_eq!(config.request_timeout_secs, 10);

    let config = config.with_api_url("http://127.0.0.1:9999");
    assert_eq!(config.api_url, "http://127.0.0.1:9999");

    let config = config.with_default_pair("ETH", "USDC");
    assert_eq!(config.default_from_token.as_deref(), Some("ETH"));
    assert_eq!(config.default_to_token.as_deref(), Some("USDC"));
}

#[test]
fn test_config_round_trip() {
    init_test_env();

    let network = SlopeNetworkConfig::new(
        "local".to_string(),
        "http://127.0.0.1:3000".to_string(),
        10,
        Some("BTC".to_string()),
        Some("USDT".to_string()),
    );
    let mut config = Config::with_network(network);
    config.add_token(
        "BTC".to_string(),
        TokenInfo {
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            decimals: 8,
            logo: Some("/icons/btc.svg".to_string()),
        },
    );

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("config.toml");

    config.save(&path).expect("save config");
    let loaded = Config::load(&path).expect("load config");

    assert_eq!(loaded.network.network_name, config.network.network_name);
    assert_eq!(loaded.network.api_url, config.network.api_url);
    assert_eq!(
        loaded.network.default_from_token,
        config.network.default_from_token
    );
    let token = loaded.tokens.get("BTC").expect("persisted token");
    assert_eq!(token.name, "Bitcoin");
    assert_eq!(token.decimals, 8);
}

#[test]
fn test_default_config_path_is_under_app_directory() {
    init_test_env();

    let path = Config::default_path();
    assert!(path.to_string_lossy().contains("slope-ski"));
    assert!(path.ends_with("config.toml"));
}
