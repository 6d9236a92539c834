//! # Exchange Rate SDK
//!
//! Converts integer amounts between satoshis and other denominations
//! using the mempool.space prices endpoint, with a short-lived in-memory
//! cache shielding callers from the endpoint's latency and rate limits.
//!
//! ## Usage
//!
//! ```no_run
//! use exchange_rate_sdk::{ExchangeRateProvider, MempoolRateProvider, Unit};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MempoolRateProvider::new()?;
//!
//! // 1000 sats in US cents
//! let cents = provider.from_sats(1000, Unit::Usd).await?;
//!
//! // ...and back
//! let sats = provider.to_sats(cents, Unit::Usd).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Conversions either return a converted amount or fail with an
//! [`ExchangeError`]; they never silently return an unconverted value.
//! Rounding is half away from zero in both directions.

pub mod cache;
pub mod constants;
pub mod error;
pub mod provider;
pub mod providers;
pub mod types;

// Re-export commonly used types
pub use cache::RateCache;
pub use error::{ExchangeError, FetchError};
pub use provider::ExchangeRateProvider;
pub use providers::{MempoolConfig, MempoolRateProvider};
pub use types::{RateSnapshot, RateTable, Unit};
