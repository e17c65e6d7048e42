use serde::{Deserialize, Serialize};

/// A tradable asset as it appears in pool listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Full asset name (e.g. "Bitcoin")
    pub name: String,
    /// Ticker symbol shown in selection controls (e.g. "BTC")
    pub symbol: String,
    /// Icon path or URL
    pub icon: String,
}

impl Asset {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            icon: icon.into(),
        }
    }
}

/// A liquidity pool as served by `/api/pools`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityPool {
    /// Pool identifier
    pub id: String,
    /// First asset of the pair
    pub asset_a: Asset,
    /// Second asset of the pair
    pub asset_b: Asset,
    /// Total liquidity in USD
    pub total_liquidity: f64,
    /// 24h trading volume in USD
    pub volume_24h: f64,
    /// 24h fees in USD
    pub fees_24h: f64,
    /// Annual percentage rate
    pub apr: f64,
}

impl LiquidityPool {
    /// Pair label in the form "BTC/USDT".
    pub fn pair_label(&self) -> String {
        format!("{}/{}", self.asset_a.symbol, self.asset_b.symbol)
    }
}

/// A staking gauge as served by `/api/gauges`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakingGauge {
    /// Gauge identifier
    pub id: String,
    /// Symbol of the LP token accepted by this gauge
    pub lp_token_symbol: String,
    /// Annual percentage rate
    pub apr: f64,
    /// Total value staked in USD
    pub total_staked: f64,
}
