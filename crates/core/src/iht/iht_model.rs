use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inheritance-tax configuration. Injected, never hardcoded in the
/// calculator. `effective_rate` is fractional (0.20 = 20%).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IhtConfig {
    pub threshold: Decimal,
    pub effective_rate: Decimal,
    pub base_currency: String,
}

/// One personally-held asset's contribution to the exposure, in the base
/// currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalAssetContribution {
    pub asset_id: String,
    pub entity_id: String,
    pub name: String,
    pub value: Decimal,
}

/// Exposure above the configured threshold for assets held personally
/// (outside corporate or trust wrappers).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IhtExposure {
    pub currency: String,
    pub personal_assets_value: Decimal,
    pub threshold: Decimal,
    pub excess: Decimal,
    pub estimated_tax: Decimal,
    pub is_exposed: bool,
    pub contributions: Vec<PersonalAssetContribution>,
}
