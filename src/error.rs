//! Error types for the exchange rate SDK

use crate::types::Unit;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while fetching the remote rate table
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network request failed
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Remote responded with a non-success status
    #[error("price endpoint returned HTTP {0}")]
    Status(StatusCode),

    /// Response body was not a symbol -> price mapping
    #[error("invalid price response: {0}")]
    Parse(String),
}

/// Errors that can occur when converting an amount
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Unit is not convertible by this provider
    #[error("unsupported unit: {0}")]
    UnsupportedUnit(Unit),

    /// Fetching the rate table failed; the conversion may be retried later
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Remote responded but omitted the requested currency
    #[error("no rate reported for {0}")]
    RateUnavailable(Unit),

    /// Resolved rate was exactly zero; dividing by it would be meaningless
    #[error("exchange rate for {0} is zero")]
    ZeroRate(Unit),
}
