//! Patrimony Core - valuation and risk engine for multi-entity,
//! multi-currency family holdings.
//!
//! This crate contains the numeric and temporal core: currency
//! normalization, ownership-weighted equity attribution, equity-decay
//! projection, shadow-equity tracking, disposal scheduling, event-mode
//! revenue, cash-flow aggregation and inheritance-tax exposure. It is
//! persistence-agnostic and defines traits implemented by the storage
//! collaborator; every calculator is a pure function of the snapshot it is
//! given.

pub mod cashflow;
pub mod constants;
pub mod decay;
pub mod engine;
pub mod errors;
pub mod event_mode;
pub mod fx;
pub mod holdings;
pub mod iht;
pub mod portfolio;
pub mod pruning;
pub mod shadow_equity;

// Re-export common types
pub use engine::HoldingsEngine;
pub use errors::Error;
pub use errors::Result;
pub use fx::{CurrencyNormalizer, RateTable};
pub use holdings::*;
