//! Constants for the exchange rate SDK

/// mempool.space prices endpoint
pub const MEMPOOL_PRICES_URL: &str = "https://mempool.space/api/v1/prices";

/// How long a fetched rate table stays fresh (in seconds)
pub const DEFAULT_CACHE_TIMEOUT_SECS: u64 = 60;

/// HTTP request timeout when fetching rates (in seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Satoshis in one bitcoin
pub const SATS_PER_BTC: f64 = 100_000_000.0;

/// User agent for HTTP requests
pub const USER_AGENT: &str = "exchange-rate-sdk/0.1.0";
