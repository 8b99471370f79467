//! Portfolio module - consolidated valuation and equity attribution.

mod portfolio_aggregator;
mod portfolio_model;

pub use portfolio_aggregator::aggregate;
pub use portfolio_model::{AssetPosition, PortfolioSummary};
