use std::time::Duration;

use chrono::Utc;
use reqwest::Client as HttpClient;

use crate::config::SlopeNetworkConfig;
use crate::error::Error;
use crate::pool::{LiquidityPool, StakingGauge};
use crate::token::{CatalogSnapshot, TokenCatalog};

/// Client for the slope.ski pools and gauges API
pub struct SlopeClient {
    /// Underlying HTTP client
    http: HttpClient,
    /// Network configuration
    config: SlopeNetworkConfig,
}

impl SlopeClient {
    /// Create a new client with the given configuration
    pub fn new(config: SlopeNetworkConfig) -> Result<Self, Error> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Get the network configuration
    pub fn config(&self) -> &SlopeNetworkConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Fetch all liquidity pools
    pub async fn get_pools(&self) -> Result<Vec<LiquidityPool>, Error> {
        let url = self.endpoint("api/pools");
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Api(format!("{} returned {}", url, response.status())));
        }

        Ok(response.json::<Vec<LiquidityPool>>().await?)
    }

    /// Fetch all staking gauges
    pub async fn get_gauges(&self) -> Result<Vec<StakingGauge>, Error> {
        let url = self.endpoint("api/gauges");
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Api(format!("{} returned {}", url, response.status())));
        }

        Ok(response.json::<Vec<StakingGauge>>().await?)
    }

    /// Fetch a single pool by identifier
    pub async fn get_pool(&self, pool_id: &str) -> Result<LiquidityPool, Error> {
        let pools = self.get_pools().await?;
        pools
            .into_iter()
            .find(|pool| pool.id == pool_id)
            .ok_or_else(|| Error::Api(format!("unknown pool: {}", pool_id)))
    }

    /// Fetch pools and gauges concurrently
    pub async fn get_market_data(&self) -> Result<(Vec<LiquidityPool>, Vec<StakingGauge>), Error> {
        futures::try_join!(self.get_pools(), self.get_gauges())
    }

    /// Fetch pools and assemble the selectable token catalog from them
    pub async fn fetch_catalog(&self) -> Result<CatalogSnapshot, Error> {
        let pools = self.get_pools().await?;
        let catalog = TokenCatalog::from_pools(&pools)?;
        Ok(CatalogSnapshot {
            catalog,
            fetched_at: Utc::now(),
        })
    }
}
