mod swap_screen_tests;

use crate::client::SlopeClient;
use crate::config::SlopeNetworkConfig;
use crate::pool::{Asset, LiquidityPool};

/// Client pointing at a loopback endpoint; never contacted by these tests
pub(crate) fn test_client() -> SlopeClient {
    let config = SlopeNetworkConfig::new(
        "test".to_string(),
        "http://127.0.0.1:3000".to_string(),
        5,
        Some("BTC".to_string()),
        Some("USDT".to_string()),
    );
    SlopeClient::new(config).expect("client construction should not fail")
}

pub(crate) fn sample_pool(id: &str, a: &str, b: &str) -> LiquidityPool {
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

pub(crate) fn sample_pools() -> Vec<LiquidityPool> {
    vec![
        sample_pool("pool-1", "BTC", "USDT"),
        sample_pool("pool-2", "ETH", "USDC"),
        sample_pool("pool-3", "BTC", "ETH"),
    ]
}
