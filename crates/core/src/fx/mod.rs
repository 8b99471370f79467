//! FX (Foreign Exchange) module - rate table configuration and conversions.

mod fx_errors;
mod fx_model;
mod fx_service;

pub use fx_errors::FxError;
pub use fx_model::RateTable;
pub use fx_service::CurrencyNormalizer;
