//! Inheritance-tax threshold exposure for personally-held assets.

use std::collections::HashSet;

use rust_decimal::Decimal;

use super::iht_model::{IhtConfig, IhtExposure, PersonalAssetContribution};
use crate::constants::DECIMAL_PRECISION;
use crate::errors::Result;
use crate::fx::CurrencyNormalizer;
use crate::holdings::{Asset, Entity};

/// Sums assets held by personal (non-corporate) entities in the configured
/// base currency and computes the excess over the threshold.
pub fn compute(
    entities: &[Entity],
    assets: &[Asset],
    normalizer: &CurrencyNormalizer,
    config: &IhtConfig,
) -> Result<IhtExposure> {
    let personal_entities: HashSet<&str> = entities
        .iter()
        .filter(|e| e.kind.is_personal())
        .map(|e| e.id.as_str())
        .collect();

    let mut personal_assets_value = Decimal::ZERO;
    let mut contributions = Vec::new();

    for asset in assets
        .iter()
        .filter(|a| personal_entities.contains(a.entity_id.as_str()))
    {
        let value = normalizer
            .convert(asset.valuation, &asset.currency, &config.base_currency)?
            .round_dp(DECIMAL_PRECISION);
        personal_assets_value += value;
        contributions.push(PersonalAssetContribution {
            asset_id: asset.id.clone(),
            entity_id: asset.entity_id.clone(),
            name: asset.name.clone(),
            value,
        });
    }

    let excess = (personal_assets_value - config.threshold).max(Decimal::ZERO);
    let estimated_tax = (excess * config.effective_rate).round_dp(DECIMAL_PRECISION);

    Ok(IhtExposure {
        currency: config.base_currency.clone(),
        personal_assets_value: personal_assets_value.round_dp(DECIMAL_PRECISION),
        threshold: config.threshold,
        excess,
        estimated_tax,
        is_exposed: excess > Decimal::ZERO,
        contributions,
    })
}
