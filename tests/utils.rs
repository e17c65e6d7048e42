use slope_ski_sdk::config::SlopeNetworkConfig;
use slope_ski_sdk::pool::{Asset, LiquidityPool, StakingGauge};

#[cfg(test)]
#[allow(dead_code)]
pub mod test_utils {
    use super::*;

    /// Initialize the test environment (env vars and logging)
    pub fn init_test_env() {
        dotenv::dotenv().ok();
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Create a network config pointing at the given API endpoint
    pub fn test_network_config(api_url: &str) -> SlopeNetworkConfig {
        SlopeNetworkConfig::new(
            "test".to_string(),
            api_url.to_string(),
            5,
            Some("BTC".to_string()),
            Some("USDT".to_string()),
        )
    }

    /// A pool over the given pair with fixed market figures
    pub fn pool(id: &str, a: &str, b: &str) -> LiquidityPool {
        LiquidityPool {
            id: id.to_string(),
            asset_a: Asset::new(a, a, format!("/icons/{}.svg", a.to_lowercase())),
            asset_b: Asset::new(b, b, format!("/icons/{}.svg", b.to_lowercase())),
            total_liquidity: 1_000_000.0,
            volume_24h: 50_000.0,
            fees_24h: 150.0,
            apr: 4.2,
        }
    }

    /// Pool set whose symbols collapse to [BTC, ETH, USDC, USDT]
    pub fn sample_pools() -> Vec<LiquidityPool> {
        vec![
            pool("pool-1", "BTC", "USDT"),
            pool("pool-2", "ETH", "USDC"),
            pool("pool-3", "BTC", "ETH"),
        ]
    }

    /// Gauge fixture matching the sample pools
    pub fn sample_gauges() -> Vec<StakingGauge> {
        vec![
            StakingGauge {
                id: "gauge-1".to_string(),
                lp_token_symbol: "BTC-USDT-LP".to_string(),
                apr: 7.5,
                total_staked: 250_000.0,
            },
            StakingGauge {
                id: "gauge-2".to_string(),
                lp_token_symbol: "ETH-USDC-LP".to_string(),
                apr: 5.1,
                total_staked: 120_000.0,
            },
        ]
    }
}
