//! Types for the exchange rate SDK

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Currency units an amount can be denominated in
///
/// `Sat` is the base accounting unit; every conversion goes through it.
/// Fiat units are denominated in their customary subunit (cents for USD
/// and EUR, whole yen for JPY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Satoshi (1e-8 BTC), the base unit
    Sat,
    /// Millisatoshi, used on the wire by some wallets; not quoted remotely
    Msat,
    /// US dollar, in cents
    Usd,
    /// Euro, in cents
    Eur,
    /// Japanese yen, in whole yen
    Jpy,
}

impl Unit {
    /// Get the unit code used in serialized form and error messages
    pub fn code(&self) -> &'static str {
        match self {
            Unit::Sat => "sat",
            Unit::Msat => "msat",
            Unit::Usd => "usd",
            Unit::Eur => "eur",
            Unit::Jpy => "jpy",
        }
    }

    /// Get the symbol the price endpoint quotes this unit under
    ///
    /// Returns `None` for units the remote source cannot quote. The base
    /// unit is deliberately absent: it converts at identity and never
    /// reaches a rate lookup.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Unit::Sat | Unit::Msat => None,
            Unit::Usd => Some("USD"),
            Unit::Eur => Some("EUR"),
            Unit::Jpy => Some("JPY"),
        }
    }

    /// Get the multiplier from the quoted major unit to the unit callers use
    ///
    /// Quotes arrive as the price of one bitcoin in the currency's major
    /// unit (dollars, euros, yen). USD and EUR amounts are handled in
    /// cents, so their scale is 100; yen has no subunit.
    pub fn subunit_scale(&self) -> f64 {
        match self {
            Unit::Usd | Unit::Eur => 100.0,
            Unit::Sat | Unit::Msat | Unit::Jpy => 1.0,
        }
    }

    /// Get all units
    pub fn all() -> &'static [Unit] {
        &[Unit::Sat, Unit::Msat, Unit::Usd, Unit::Eur, Unit::Jpy]
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One fetch cycle's worth of rates: unit -> price of one BTC in that
/// unit's major denomination. A missing key means the remote source did
/// not report that currency this cycle; it must never be read as zero.
pub type RateTable = HashMap<Unit, f64>;

/// Immutable timestamped rate table, replaced wholesale on every refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSnapshot {
    /// When the table was fetched
    pub fetched_at: DateTime<Utc>,

    /// The rates observed in that fetch
    pub rates: RateTable,
}

impl RateSnapshot {
    /// Create a snapshot timestamped now
    pub fn new(rates: RateTable) -> Self {
        Self {
            fetched_at: Utc::now(),
            rates,
        }
    }

    /// Check whether the snapshot is still inside the freshness window
    pub fn is_fresh(&self, max_age: Duration) -> bool {
        let age = Utc::now().signed_duration_since(self.fetched_at);
        age.num_milliseconds() <= max_age.as_millis() as i64
    }

    /// Get the age of the snapshot
    pub fn age(&self) -> Duration {
        let age = Utc::now().signed_duration_since(self.fetched_at);
        Duration::from_millis(age.num_milliseconds().max(0) as u64)
    }

    /// Get the raw quote for a unit, if the remote reported it
    pub fn rate(&self, unit: Unit) -> Option<f64> {
        self.rates.get(&unit).copied()
    }
}
