use config::{Config as ConfigLoader, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::Error;

/// Network constants loaded from configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConstants {
    /// Network name
    pub network_name: String,
    /// Default API endpoint
    pub default_api_url: String,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
    /// Default source token for the swap form
    pub default_from_token: Option<String>,
    /// Default destination token for the swap form
    pub default_to_token: Option<String>,
}

impl NetworkConstants {
    /// Create a new NetworkConstants with specified values
    pub fn new(
        network_name: String,
        default_api_url: String,
        request_timeout_secs: u64,
        default_from_token: Option<String>,
        default_to_token: Option<String>,
    ) -> Self {
        Self {
            network_name,
            default_api_url,
            request_timeout_secs,
            default_from_token,
            default_to_token,
        }
    }

    /// Load network constants from the configuration file
    pub fn load(network: &str) -> Result<Self, ConfigError> {
        let config_dir = env::var("SLOPE_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        let settings = ConfigLoader::builder()
            // Add the config file
            .add_source(File::with_name(&format!("{}/network", config_dir)))
            .build()?;

        // Extract the network section
        settings.get::<NetworkConstants>(network)
    }
}

/// Network configuration for the slope.ski API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlopeNetworkConfig {
    /// Network name (e.g. local, testnet)
    pub network_name: String,
    /// Base URL of the pools/gauges API
    pub api_url: String,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
    /// Default source token for the swap form
    pub default_from_token: Option<String>,
    /// Default destination token for the swap form
    pub default_to_token: Option<String>,
}

impl SlopeNetworkConfig {
    /// Create a new network config with specified values
    pub fn new(
        network_name: String,
        api_url: String,
        request_timeout_secs: u64,
        default_from_token: Option<String>,
        default_to_token: Option<String>,
    ) -> Self {
        Self {
            network_name,
            api_url,
            request_timeout_secs,
            default_from_token,
            default_to_token,
        }
    }

    /// Create a new network config from network constants
    pub fn from_constants(constants: &NetworkConstants) -> Self {
        Self {
            network_name: constants.network_name.clone(),
            api_url: constants.default_api_url.clone(),
            request_timeout_secs: constants.request_timeout_secs,
            default_from_token: constants.default_from_token.clone(),
            default_to_token: constants.default_to_token.clone(),
        }
    }

    /// Override the API base URL
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Override the default token pair
    pub fn with_default_pair(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.default_from_token = Some(from.into());
        self.default_to_token = Some(to.into());
        self
    }
}

/// Complete configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active network configuration
    pub network: SlopeNetworkConfig,
    /// Known tokens and their metadata
    pub tokens: HashMap<String, TokenInfo>,
}

/// Token information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Token decimals
    pub decimals: u8,
    /// Token logo URL
    pub logo: Option<String>,
}

impl Config {
    /// Create a new configuration with the specified network
    pub fn with_network(network: SlopeNetworkConfig) -> Self {
        Self {
            network,
            tokens: HashMap::new(),
        }
    }

    /// Load configuration from a file
    pub fn load(path: &PathBuf) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &PathBuf) -> Result<(), Error> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        // Create directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("slope-ski");
        path.push("config.toml");
        path
    }

    /// Add token information
    pub fn add_token(&mut self, symbol: String, token_info: TokenInfo) {
        self.tokens.insert(symbol, token_info);
    }
}
