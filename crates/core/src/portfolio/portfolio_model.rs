use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-asset valuation line inside a [`PortfolioSummary`], all amounts in the
/// summary's base currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPosition {
    pub asset_id: String,
    pub entity_id: String,
    pub name: String,
    pub native_currency: String,
    pub value: Decimal,
    pub debt: Decimal,
    pub net_equity: Decimal,
    pub principal_equity: Decimal,
    pub minority_equity: Decimal,
}

/// Consolidated position across all assets and debts, in one base currency.
///
/// Equity attribution is per-asset: each asset's net value is split across
/// its owners by percentage and the shares accumulate additively. There is
/// no portfolio-level netting before the split.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub base_currency: String,
    pub gross_value: Decimal,
    pub total_debt: Decimal,
    pub principal_equity: Decimal,
    pub minority_equity: Decimal,
    /// Loan-to-value, in percent. Zero when gross value is zero.
    pub ltv: Decimal,
    pub positions: Vec<AssetPosition>,
    pub calculated_at: DateTime<Utc>,
}
