//! mempool.space exchange rate provider implementation

use crate::{
    cache::RateCache,
    constants::{
        DEFAULT_CACHE_TIMEOUT_SECS, MEMPOOL_PRICES_URL, REQUEST_TIMEOUT_SECS, SATS_PER_BTC,
        USER_AGENT,
    },
    error::{ExchangeError, FetchError},
    provider::ExchangeRateProvider,
    types::{RateTable, Unit},
};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

/// Configuration for [`MempoolRateProvider`]
#[derive(Debug, Clone)]
pub struct MempoolConfig {
    /// Prices endpoint to poll
    pub base_url: String,

    /// How long a fetched rate table stays fresh
    pub cache_timeout: Duration,
}

impl Default for MempoolConfig {
    fn default() -> Self {
        Self {
            base_url: MEMPOOL_PRICES_URL.to_string(),
            cache_timeout: Duration::from_secs(DEFAULT_CACHE_TIMEOUT_SECS),
        }
    }
}

/// Exchange rate provider backed by the mempool.space prices endpoint
///
/// The endpoint returns a flat JSON object of currency symbols to the
/// price of one bitcoin in that currency's major unit. Fetched tables
/// are cached for [`MempoolConfig::cache_timeout`]; conversions inside
/// the window never touch the network. Two concurrent callers that both
/// observe a stale cache may both fetch; the second `replace` simply
/// wins, and readers always see a complete table.
///
/// Rounding is half away from zero (`f64::round`) in both directions.
pub struct MempoolRateProvider {
    client: Client,
    config: MempoolConfig,
    cache: RateCache,
}

impl MempoolRateProvider {
    /// Creates a provider with the default mempool.space configuration
    pub fn new() -> Result<Self, ExchangeError> {
        Self::with_config(MempoolConfig::default())
    }

    /// Creates a provider with custom endpoint and freshness window
    pub fn with_config(config: MempoolConfig) -> Result<Self, ExchangeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Network)?;

        Ok(Self {
            client,
            config,
            cache: RateCache::new(),
        })
    }

    /// Builds a rate table from the raw symbol -> price response,
    /// leaving absent any unit whose symbol the remote omitted
    fn build_table(quotes: &HashMap<String, f64>) -> RateTable {
        Unit::all()
            .iter()
            .filter_map(|unit| {
                let symbol = unit.symbol()?;
                quotes.get(symbol).map(|price| (*unit, *price))
            })
            .collect()
    }

    /// Performs one GET against the prices endpoint and returns the
    /// parsed table. No retries; transient failures surface to the caller.
    async fn fetch_rates(&self) -> Result<RateTable, FetchError> {
        tracing::debug!(url = %self.config.base_url, "fetching exchange rates");

        let response = self
            .client
            .get(&self.config.base_url)
            .send()
            .await
            .map_err(FetchError::Network)?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().await.map_err(FetchError::Network)?;
        let quotes: HashMap<String, f64> = serde_json::from_str(&body)
            .map_err(|e| FetchError::Parse(format!("{}. Response: {}", e, body)))?;

        let table = Self::build_table(&quotes);
        tracing::debug!(rates = table.len(), "fetched exchange rate table");
        Ok(table)
    }

    /// Resolves how many of `unit` one satoshi is worth
    ///
    /// The base unit is identity and never fetches. Otherwise the cached
    /// table is used if fresh and it quotes the unit; anything else
    /// triggers a fetch that replaces the whole cache. A fresh table
    /// that still lacks the unit is an error, never a fallback to a
    /// stale value.
    async fn unit_per_sat(&self, unit: Unit) -> Result<f64, ExchangeError> {
        if unit == Unit::Sat {
            return Ok(1.0);
        }
        if unit.symbol().is_none() {
            return Err(ExchangeError::UnsupportedUnit(unit));
        }

        let cached = self
            .cache
            .fresh(self.config.cache_timeout)
            .await
            .and_then(|snapshot| snapshot.rate(unit));

        let raw_quote = match cached {
            Some(quote) => quote,
            None => {
                let table = self.fetch_rates().await?;
                let quote = table.get(&unit).copied();
                self.cache.replace(table).await;
                quote.ok_or(ExchangeError::RateUnavailable(unit))?
            }
        };

        // price of 1 BTC -> price of 1 sat, then into the caller's subunit
        Ok(raw_quote / SATS_PER_BTC * unit.subunit_scale())
    }
}

#[async_trait]
impl ExchangeRateProvider for MempoolRateProvider {
    async fn from_sats(&self, sats: u64, unit: Unit) -> Result<u64, ExchangeError> {
        if unit == Unit::Sat {
            return Ok(sats);
        }
        let rate = self.unit_per_sat(unit).await?;
        Ok((sats as f64 * rate).round() as u64)
    }

    async fn to_sats(&self, amount: u64, unit: Unit) -> Result<u64, ExchangeError> {
        if unit == Unit::Sat {
            return Ok(amount);
        }
        let rate = self.unit_per_sat(unit).await?;
        if rate == 0.0 {
            return Err(ExchangeError::ZeroRate(unit));
        }
        Ok((amount as f64 / rate).round() as u64)
    }
}
