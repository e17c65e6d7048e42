//! Token catalog for the swap interface.
//!
//! The catalog is the ordered, immutable list of symbols a user can pick
//! in the swap form. It is injected at construction time, either as an
//! explicit list or assembled from the asset pairs of the current pool
//! set, and never changes for the lifetime of a form.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::pool::LiquidityPool;

/// Ordered, immutable catalog of selectable token symbols.
///
/// A catalog always holds at least two distinct symbols; anything smaller
/// cannot back a swap form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenCatalog {
    tokens: Vec<String>,
}

impl TokenCatalog {
    /// Build a catalog from an explicit symbol list.
    ///
    /// Order is preserved and duplicates are dropped, first occurrence
    /// wins.
    pub fn new<I, S>(symbols: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens: Vec<String> = Vec::new();
        for symbol in symbols {
            let symbol = symbol.into();
            if !tokens.contains(&symbol) {
                tokens.push(symbol);
            }
        }

        if tokens.len() < 2 {
            return Err(Error::Catalog(
                "catalog requires at least two distinct tokens".to_string(),
            ));
        }

        Ok(Self { tokens })
    }

    /// Build a catalog from the asset symbols of a pool set.
    ///
    /// Symbols are deduplicated across pools and sorted lexicographically,
    /// matching the ordering of the swap page's selection controls.
    pub fn from_pools(pools: &[LiquidityPool]) -> Result<Self, Error> {
        let mut symbols = BTreeSet::new();
        for pool in pools {
            symbols.insert(pool.asset_a.symbol.clone());
            symbols.insert(pool.asset_b.symbol.clone());
        }
        Self::new(symbols)
    }

    /// Whether the catalog contains the given symbol.
    pub fn contains(&self, symbol: &str) -> bool {
        self.tokens.iter().any(|t| t == symbol)
    }

    /// Symbol at the given position, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Position of the given symbol, if present.
    pub fn position(&self, symbol: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t == symbol)
    }

    /// Number of tokens in the catalog (always at least two).
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false; kept for interface completeness.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterator over the symbols in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// The symbols as a slice, in catalog order.
    pub fn symbols(&self) -> &[String] {
        &self.tokens
    }
}

/// A catalog together with the time it was assembled from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// The assembled catalog
    pub catalog: TokenCatalog,
    /// When the backing pool data was fetched
    pub fetched_at: DateTime<Utc>,
}
