//! Provider abstraction for converting between satoshis and other units

use crate::{error::ExchangeError, types::Unit};
use async_trait::async_trait;

/// Trait for exchange rate providers
///
/// Implementations resolve a conversion rate from some source (a remote
/// price API, a fixed test table, ...) and apply it to integer amounts.
/// Conversions either return the converted amount or fail explicitly;
/// they never silently fall back to an identity conversion.
#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Converts an amount of satoshis into the given unit
    ///
    /// Returns `sats` unchanged when `unit` is the base unit. Rounding is
    /// half away from zero.
    async fn from_sats(&self, sats: u64, unit: Unit) -> Result<u64, ExchangeError>;

    /// Converts an amount in the given unit back into satoshis
    ///
    /// Inverse of [`from_sats`](Self::from_sats), with the same rounding
    /// convention.
    async fn to_sats(&self, amount: u64, unit: Unit) -> Result<u64, ExchangeError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock provider backed by a fixed cents-per-sat rate table
    pub struct FixedRateProvider {
        unit_per_sat: HashMap<Unit, f64>,
        call_count: Mutex<usize>,
    }

    impl FixedRateProvider {
        pub fn new() -> Self {
            Self {
                unit_per_sat: HashMap::new(),
                call_count: Mutex::new(0),
            }
        }

        pub fn set_rate(&mut self, unit: Unit, rate: f64) {
            self.unit_per_sat.insert(unit, rate);
        }

        pub fn call_count(&self) -> usize {
            *self.call_count.lock().unwrap()
        }

        fn rate(&self, unit: Unit) -> Result<f64, ExchangeError> {
            *self.call_count.lock().unwrap() += 1;
            if unit == Unit::Sat {
                return Ok(1.0);
            }
            self.unit_per_sat
                .get(&unit)
                .copied()
                .ok_or(ExchangeError::UnsupportedUnit(unit))
        }
    }

    #[async_trait]
    impl ExchangeRateProvider for FixedRateProvider {
        async fn from_sats(&self, sats: u64, unit: Unit) -> Result<u64, ExchangeError> {
            let rate = self.rate(unit)?;
            Ok((sats as f64 * rate).round() as u64)
        }

        async fn to_sats(&self, amount: u64, unit: Unit) -> Result<u64, ExchangeError> {
            let rate = self.rate(unit)?;
            if rate == 0.0 {
                return Err(ExchangeError::ZeroRate(unit));
            }
            Ok((amount as f64 / rate).round() as u64)
        }
    }
}
