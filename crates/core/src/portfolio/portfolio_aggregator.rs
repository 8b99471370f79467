//! Ownership-weighted equity attribution across assets and debts.

use chrono::Utc;
use rayon::prelude::*;
use rust_decimal::Decimal;

use super::portfolio_model::{AssetPosition, PortfolioSummary};
use crate::constants::{DECIMAL_PRECISION, PERCENT_SCALE};
use crate::errors::Result;
use crate::fx::CurrencyNormalizer;
use crate::holdings::{Asset, Debt};

/// Aggregates assets and debts into a single consolidated position in
/// `base_currency`.
///
/// Each asset's contribution is independent, so positions are valued in
/// parallel and reduced; output order follows input order regardless.
/// Debts that reference no asset still count toward total debt and reduce
/// the principal owner's equity (there is no per-asset split to apportion
/// them against).
pub fn aggregate(
    assets: &[Asset],
    debts: &[Debt],
    normalizer: &CurrencyNormalizer,
    base_currency: &str,
) -> Result<PortfolioSummary> {
    let positions: Vec<AssetPosition> = assets
        .par_iter()
        .map(|asset| value_position(asset, debts, normalizer, base_currency))
        .collect::<Result<Vec<_>>>()?;

    let mut gross_value = Decimal::ZERO;
    let mut total_debt = Decimal::ZERO;
    let mut principal_equity = Decimal::ZERO;
    let mut minority_equity = Decimal::ZERO;

    for position in &positions {
        gross_value += position.value;
        total_debt += position.debt;
        principal_equity += position.principal_equity;
        minority_equity += position.minority_equity;
    }

    // Unsecured debts: portfolio-level liabilities against the principal owner.
    for debt in debts.iter().filter(|d| d.asset_id.is_none()) {
        let balance = normalizer.convert(debt.balance, &debt.currency, base_currency)?;
        total_debt += balance;
        principal_equity -= balance;
    }

    let ltv = if gross_value.is_zero() {
        Decimal::ZERO
    } else {
        (total_debt / gross_value * PERCENT_SCALE).round_dp(DECIMAL_PRECISION)
    };

    Ok(PortfolioSummary {
        base_currency: base_currency.to_string(),
        gross_value: gross_value.round_dp(DECIMAL_PRECISION),
        total_debt: total_debt.round_dp(DECIMAL_PRECISION),
        principal_equity: principal_equity.round_dp(DECIMAL_PRECISION),
        minority_equity: minority_equity.round_dp(DECIMAL_PRECISION),
        ltv,
        positions,
        calculated_at: Utc::now(),
    })
}

/// Values one asset in the base currency: converts its valuation and the
/// balances of the debts secured against it, nets them, and splits the net
/// across owners by percentage.
fn value_position(
    asset: &Asset,
    debts: &[Debt],
    normalizer: &CurrencyNormalizer,
    base_currency: &str,
) -> Result<AssetPosition> {
    let value = normalizer.convert(asset.valuation, &asset.currency, base_currency)?;

    let mut debt = Decimal::ZERO;
    for d in debts
        .iter()
        .filter(|d| d.asset_id.as_deref() == Some(asset.id.as_str()))
    {
        debt += normalizer.convert(d.balance, &d.currency, base_currency)?;
    }

    let net_equity = value - debt;
    let principal_equity = net_equity * asset.ownership.principal_pct / PERCENT_SCALE;
    let minority_equity = net_equity * asset.ownership.minority_total() / PERCENT_SCALE;

    Ok(AssetPosition {
        asset_id: asset.id.clone(),
        entity_id: asset.entity_id.clone(),
        name: asset.name.clone(),
        native_currency: asset.currency.clone(),
        value: value.round_dp(DECIMAL_PRECISION),
        debt: debt.round_dp(DECIMAL_PRECISION),
        net_equity: net_equity.round_dp(DECIMAL_PRECISION),
        principal_equity: principal_equity.round_dp(DECIMAL_PRECISION),
        minority_equity: minority_equity.round_dp(DECIMAL_PRECISION),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::RateTable;
    use crate::holdings::{AssetStatus, DebtKind, MinorityStake, OwnershipSplit, Tier};
    use rust_decimal_macros::dec;

    fn normalizer() -> CurrencyNormalizer {
        let table = RateTable::new("GBP")
            .with_factor("USD", dec!(0.79))
            .with_factor("EUR", dec!(0.85));
        CurrencyNormalizer::new(table).unwrap()
    }

    fn asset(id: &str, valuation: Decimal, currency: &str, ownership: OwnershipSplit) -> Asset {
        Asset {
            id: id.to_string(),
            entity_id: "entity-1".to_string(),
            name: format!("Asset {id}"),
            valuation,
            currency: currency.to_string(),
            ownership,
            status: AssetStatus::Operational,
            tier: Tier::Core,
            location: None,
            acquisition: None,
            monthly_payment: None,
            annual_turnover: None,
            disposal: None,
        }
    }

    fn secured_debt(id: &str, asset_id: &str, balance: Decimal, currency: &str) -> Debt {
        Debt {
            id: id.to_string(),
            asset_id: Some(asset_id.to_string()),
            entity_id: None,
            creditor: "Bank".to_string(),
            principal: balance,
            balance,
            annual_rate_pct: dec!(5),
            kind: DebtKind::Fixed,
            compounding: false,
            currency: currency.to_string(),
            maturity: None,
        }
    }

    #[test]
    fn test_single_asset_split_scenario() {
        // 1,000,000 GBP valuation, 400,000 GBP debt, 70/30 split
        let split = OwnershipSplit {
            principal_pct: dec!(70),
            minority: vec![MinorityStake {
                owner: "Sibling".to_string(),
                percentage: dec!(30),
            }],
        };
        let assets = vec![asset("a1", dec!(1000000), "GBP", split)];
        let debts = vec![secured_debt("d1", "a1", dec!(400000), "GBP")];

        let summary = aggregate(&assets, &debts, &normalizer(), "GBP").unwrap();

        assert_eq!(summary.gross_value, dec!(1000000));
        assert_eq!(summary.total_debt, dec!(400000));
        assert_eq!(summary.principal_equity, dec!(420000));
        assert_eq!(summary.minority_equity, dec!(180000));
        assert_eq!(summary.ltv, dec!(40));

        let position = &summary.positions[0];
        assert_eq!(position.net_equity, dec!(600000));
    }

    #[test]
    fn test_empty_portfolio_has_zero_ltv() {
        let summary = aggregate(&[], &[], &normalizer(), "GBP").unwrap();
        assert_eq!(summary.gross_value, Decimal::ZERO);
        assert_eq!(summary.ltv, Decimal::ZERO);
        assert!(summary.positions.is_empty());
    }

    #[test]
    fn test_multi_currency_assets_convert_to_base() {
        let assets = vec![
            asset("a1", dec!(1000000), "GBP", OwnershipSplit::sole()),
            asset("a2", dec!(1000000), "USD", OwnershipSplit::sole()),
        ];
        let summary = aggregate(&assets, &[], &normalizer(), "GBP").unwrap();
        assert_eq!(summary.gross_value, dec!(1790000));
        assert_eq!(summary.principal_equity, dec!(1790000));
    }

    #[test]
    fn test_attribution_is_per_asset_not_portfolio_netting() {
        // Principal wholly owns a1 (in debt), splits a2 70/30.
        // Netting at portfolio level before the split would shift debt onto
        // the minority owner; per-asset attribution must not.
        let split = OwnershipSplit {
            principal_pct: dec!(70),
            minority: vec![MinorityStake {
                owner: "Sibling".to_string(),
                percentage: dec!(30),
            }],
        };
        let assets = vec![
            asset("a1", dec!(500000), "GBP", OwnershipSplit::sole()),
            asset("a2", dec!(1000000), "GBP", split),
        ];
        let debts = vec![secured_debt("d1", "a1", dec!(600000), "GBP")];

        let summary = aggregate(&assets, &debts, &normalizer(), "GBP").unwrap();
        // a1 equity: -100,000 all principal; a2: 700,000 / 300,000
        assert_eq!(summary.principal_equity, dec!(600000));
        assert_eq!(summary.minority_equity, dec!(300000));
    }

    #[test]
    fn test_unsecured_debt_counts_toward_total_and_principal() {
        let assets = vec![asset("a1", dec!(1000000), "GBP", OwnershipSplit::sole())];
        let mut unsecured = secured_debt("d1", "a1", dec!(200000), "GBP");
        unsecured.asset_id = None;
        unsecured.entity_id = Some("entity-1".to_string());

        let summary = aggregate(&assets, &[unsecured], &normalizer(), "GBP").unwrap();
        assert_eq!(summary.total_debt, dec!(200000));
        assert_eq!(summary.principal_equity, dec!(800000));
        assert_eq!(summary.ltv, dec!(20));
        // Per-asset line carries no debt
        assert_eq!(summary.positions[0].debt, Decimal::ZERO);
    }

    #[test]
    fn test_positions_keep_input_order() {
        let assets: Vec<Asset> = (0..8)
            .map(|i| asset(&format!("a{i}"), dec!(100), "GBP", OwnershipSplit::sole()))
            .collect();
        let summary = aggregate(&assets, &[], &normalizer(), "GBP").unwrap();
        let ids: Vec<&str> = summary.positions.iter().map(|p| p.asset_id.as_str()).collect();
        assert_eq!(ids, vec!["a0", "a1", "a2", "a3", "a4", "a5", "a6", "a7"]);
    }

    #[test]
    fn test_unknown_currency_fails_the_aggregation() {
        let assets = vec![asset("a1", dec!(100), "JPY", OwnershipSplit::sole())];
        assert!(aggregate(&assets, &[], &normalizer(), "GBP").is_err());
    }
}
