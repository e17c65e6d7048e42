pub mod client;
pub mod config;
pub mod error;
pub mod pool;
pub mod swap;
pub mod token;

// TUI module - optional via "tui" feature
#[cfg(feature = "tui")]
pub mod tui;

pub use client::SlopeClient;
pub use config::{Config, NetworkConstants, SlopeNetworkConfig, TokenInfo};
pub use error::Error;
pub use pool::{Asset, LiquidityPool, StakingGauge};
pub use swap::{SwapForm, SwapFormEvent};
pub use token::{CatalogSnapshot, TokenCatalog};

// Re-export TUI entry point when feature is enabled
#[cfg(feature = "tui")]
pub use tui::run_tui;
