//! Exchange rate provider implementations

pub mod mempool;

pub use mempool::{MempoolConfig, MempoolRateProvider};
