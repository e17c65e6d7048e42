//! slope.ski - Terminal User Interface
//!
//! Entry point for the slope.ski TUI. Resolves the network to talk to,
//! then hands control to the interface loop.

#[cfg(feature = "tui")]
use clap::Parser;
#[cfg(feature = "tui")]
use slope_ski_sdk::{
    config::{NetworkConstants, SlopeNetworkConfig},
    tui::run_tui,
};
#[cfg(feature = "tui")]
use std::time::Duration;

#[cfg(feature = "tui")]
#[derive(Parser)]
#[command(name = "slope-ski-tui")]
#[command(about = "slope.ski - Terminal User Interface")]
#[command(version)]
struct Args {
    /// Network to connect to (local, testnet, mainnet)
    #[arg(short, long, default_value = "local")]
    network: String,

    /// Custom API endpoint URL
    #[arg(long)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Data refresh interval in seconds
    #[arg(long, default_value = "30")]
    refresh_interval: u64,
}

#[cfg(feature = "tui")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();

    if args.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    }

    let constants = NetworkConstants::load(&args.network).map_err(|e| {
        anyhow::anyhow!("unknown network '{}': {}", args.network, e)
    })?;

    let mut config = SlopeNetworkConfig::from_constants(&constants);
    if let Some(api_url) = args.api_url {
        config = config.with_api_url(api_url);
    }

    run_tui(config, Duration::from_secs(args.refresh_interval)).await?;

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn main() {
    eprintln!("slope-ski-tui requires the \"tui\" feature");
    std::process::exit(1);
}
