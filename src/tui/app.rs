//! Application State Management
//!
//! This module manages the global application state for the TUI:
//! screen navigation, the fetched pool and gauge data, and dispatch of
//! user events to the active screen.

use chrono::{DateTime, Utc};

use crate::client::SlopeClient;
use crate::error::Error;
use crate::pool::{LiquidityPool, StakingGauge};
use crate::token::{CatalogSnapshot, TokenCatalog};
use crate::tui::events::Event;
use crate::tui::screens::{FarmsScreenState, PoolsScreenState, SwapScreenState};

/// Available screens in the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Swap,
    Pools,
    Farms,
}

impl Screen {
    /// Get the display name for the screen
    pub fn display_name(&self) -> &'static str {
        match self {
            Screen::Swap => "Swap",
            Screen::Pools => "Pools",
            Screen::Farms => "Farms",
        }
    }

    /// Get all available screens for navigation
    pub fn all() -> Vec<Screen> {
        vec![Screen::Swap, Screen::Pools, Screen::Farms]
    }
}

/// Navigation mode for keyboard handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Navigating between main screen tabs
    ScreenLevel,
    /// Navigating within the current screen
    WithinScreen,
}

/// Global application state
pub struct App {
    /// API client
    pub client: SlopeClient,
    /// Whether the application is running
    pub running: bool,
    /// Currently displayed screen
    pub current_screen: Screen,
    /// Keyboard navigation mode
    pub navigation_mode: NavigationMode,
    /// Fetched pools, None until the first load completes
    pub pools: Option<Vec<LiquidityPool>>,
    /// Fetched gauges, None until the first load completes
    pub gauges: Option<Vec<StakingGauge>>,
    /// Catalog assembled from the fetched pools
    pub catalog: Option<CatalogSnapshot>,
    /// Swap screen state
    pub swap_screen: SwapScreenState,
    /// Pools screen state
    pub pools_screen: PoolsScreenState,
    /// Farms screen state
    pub farms_screen: FarmsScreenState,
    /// Message shown in the status bar
    pub status_message: Option<String>,
    /// When data was last refreshed
    pub last_refresh: Option<DateTime<Utc>>,
}

impl App {
    /// Create a new application around a client
    pub fn new(client: SlopeClient) -> Self {
        Self {
            client,
            running: true,
            current_screen: Screen::Swap,
            navigation_mode: NavigationMode::ScreenLevel,
            pools: None,
            gauges: None,
            catalog: None,
            swap_screen: SwapScreenState::default(),
            pools_screen: PoolsScreenState::default(),
            farms_screen: FarmsScreenState::default(),
            status_message: None,
            last_refresh: None,
        }
    }

    /// Set the status bar message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Fetch pools and gauges and fold them into the application state
    pub async fn refresh(&mut self) -> Result<(), Error> {
        let (pools, gauges) = self.client.get_market_data().await?;
        self.apply_market_data(pools, gauges)
    }

    /// Fold fetched market data into the application state.
    ///
    /// The swap form is built from the first successful load; later
    /// refreshes update the listings without touching selections the
    /// user already made.
    pub fn apply_market_data(
        &mut self,
        pools: Vec<LiquidityPool>,
        gauges: Vec<StakingGauge>,
    ) -> Result<(), Error> {
        let catalog = TokenCatalog::from_pools(&pools)?;

        if !self.swap_screen.is_ready() {
            let config = self.client.config().clone();
            self.swap_screen.initialize(
                &catalog,
                config.default_from_token.as_deref(),
                config.default_to_token.as_deref(),
            )?;
        }

        self.catalog = Some(CatalogSnapshot {
            catalog,
            fetched_at: Utc::now(),
        });
        self.pools = Some(pools);
        self.gauges = Some(gauges);
        self.last_refresh = Some(Utc::now());
        Ok(())
    }

    /// Handle a user event
    pub fn handle_event(&mut self, event: Event) {
        // Quit always wins
        if event == Event::Quit {
            self.running = false;
            return;
        }

        match self.navigation_mode {
            NavigationMode::ScreenLevel => self.handle_screen_level_event(event),
            NavigationMode::WithinScreen => self.handle_within_screen_event(event),
        }
    }

    fn handle_screen_level_event(&mut self, event: Event) {
        match event {
            Event::Tab | Event::Right => self.next_screen(),
            Event::BackTab | Event::Left => self.previous_screen(),
            Event::Enter | Event::Down => {
                self.navigation_mode = NavigationMode::WithinScreen;
            }
            _ => {}
        }
    }

    fn handle_within_screen_event(&mut self, event: Event) {
        if event == Event::Escape {
            // Close an open dropdown before leaving the screen
            if self.current_screen == Screen::Swap && self.swap_screen.has_open_dropdown() {
                self.swap_screen.close_dropdowns();
            } else {
                self.navigation_mode = NavigationMode::ScreenLevel;
            }
            return;
        }

        match self.current_screen {
            Screen::Swap => {
                if let Some(status) = self.swap_screen.handle_event(&event) {
                    self.set_status(status);
                }
            }
            Screen::Pools => {
                let count = self.pools.as_ref().map(Vec::len).unwrap_or(0);
                self.pools_screen.handle_event(&event, count);
            }
            Screen::Farms => {
                let count = self.gauges.as_ref().map(Vec::len).unwrap_or(0);
                self.farms_screen.handle_event(&event, count);
            }
        }
    }

    /// Switch to the next screen tab
    pub fn next_screen(&mut self) {
        let screens = Screen::all();
        let current = screens
            .iter()
            .position(|s| *s == self.current_screen)
            .unwrap_or(0);
        self.current_screen = screens[(current + 1) % screens.len()];
    }

    /// Switch to the previous screen tab
    pub fn previous_screen(&mut self) {
        let screens = Screen::all();
        let current = screens
            .iter()
            .position(|s| *s == self.current_screen)
            .unwrap_or(0);
        self.current_screen = screens[(current + screens.len() - 1) % screens.len()];
    }
}
