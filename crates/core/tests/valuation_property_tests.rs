//! Property-based tests for the valuation core, using `proptest` for
//! random case generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use patrimony_core::decay;
use patrimony_core::fx::{CurrencyNormalizer, RateTable};
use patrimony_core::holdings::{
    Asset, AssetStatus, Debt, DebtKind, MinorityStake, OwnershipSplit, Tier,
};
use patrimony_core::portfolio;

const CURRENCIES: [&str; 4] = ["GBP", "USD", "EUR", "CHF"];

fn normalizer() -> CurrencyNormalizer {
    let table = RateTable::new("GBP")
        .with_factor("USD", dec!(0.79))
        .with_factor("EUR", dec!(0.85))
        .with_factor("CHF", dec!(0.88));
    CurrencyNormalizer::new(table).unwrap()
}

fn asset(valuation: Decimal, currency: &str, ownership: OwnershipSplit) -> Asset {
    Asset {
        id: "a1".to_string(),
        entity_id: "e1".to_string(),
        name: "Asset".to_string(),
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

fn secured_debt(balance: Decimal) -> Debt {
    Debt {
        id: "d1".to_string(),
        asset_id: Some("a1".to_string()),
        entity_id: None,
        creditor: "Bank".to_string(),
        principal: balance,
        balance,
        annual_rate_pct: dec!(8),
        kind: DebtKind::EquityRelease,
        compounding: true,
        currency: "GBP".to_string(),
        maturity: None,
    }
}

/// Money amounts up to 100M with two decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_currency() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(CURRENCIES.as_slice())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Converting an amount to its own currency is the identity, for every
    /// supported currency.
    #[test]
    fn prop_currency_round_trip(amount in arb_amount(), currency in arb_currency()) {
        let normalizer = normalizer();
        prop_assert_eq!(
            normalizer.convert(amount, currency, currency).unwrap(),
            amount
        );
    }

    /// Converting out and back through the base recovers the amount within
    /// rounding tolerance.
    #[test]
    fn prop_conversion_inverts(amount in arb_amount(), currency in arb_currency()) {
        let normalizer = normalizer();
        let out = normalizer.convert(amount, currency, "GBP").unwrap();
        let back = normalizer.convert(out, "GBP", currency).unwrap();
        prop_assert!((back - amount).abs() < dec!(0.000001));
    }

    /// When ownership percentages sum to 100, the principal and minority
    /// equity shares together equal the asset's net equity.
    #[test]
    fn prop_equity_split_is_complete(
        valuation in arb_amount(),
        debt_cents in 0i64..10_000_000_000,
        principal_pct in 0u32..=100,
    ) {
        let balance = Decimal::new(debt_cents, 2);
        let ownership = OwnershipSplit {
            principal_pct: Decimal::from(principal_pct),
            minority: vec![MinorityStake {
                owner: "Minority".to_string(),
                percentage: Decimal::from(100 - principal_pct),
            }],
        };
        let assets = vec![asset(valuation, "GBP", ownership)];
        let debts = vec![secured_debt(balance)];

        let summary = portfolio::aggregate(&assets, &debts, &normalizer(), "GBP").unwrap();
        let net = valuation - balance;
        let split_total = summary.principal_equity + summary.minority_equity;
        prop_assert!((split_total - net).abs() < dec!(0.0001));
    }

    /// LTV is zero exactly when gross value is zero, and never negative.
    #[test]
    fn prop_ltv_bound(valuation in arb_amount(), debt_cents in 0i64..10_000_000_000) {
        let balance = Decimal::new(debt_cents, 2);
        let assets = vec![asset(valuation, "GBP", OwnershipSplit::sole())];
        let debts = vec![secured_debt(balance)];

        let summary = portfolio::aggregate(&assets, &debts, &normalizer(), "GBP").unwrap();
        if valuation.is_zero() {
            prop_assert_eq!(summary.ltv, Decimal::ZERO);
        } else {
            prop_assert!(summary.ltv >= Decimal::ZERO);
        }
    }

    /// Holding debt and rate fixed, a larger valuation never shortens the
    /// depletion horizon.
    #[test]
    fn prop_decay_horizon_grows_with_valuation(
        valuation_cents in 1_000_000i64..1_000_000_000_000,
        bump_cents in 100_000i64..1_000_000_000,
    ) {
        let as_of = chrono::NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let valuation = Decimal::new(valuation_cents, 2);
        let bumped = valuation + Decimal::new(bump_cents, 2);
        let debt = secured_debt(dec!(450000));
        let normalizer = normalizer();

        let base = decay::compute(
            &asset(valuation, "GBP", OwnershipSplit::sole()),
            &debt,
            &normalizer,
            as_of,
        )
        .unwrap();
        let more = decay::compute(
            &asset(bumped, "GBP", OwnershipSplit::sole()),
            &debt,
            &normalizer,
            as_of,
        )
        .unwrap();

        prop_assert!(more.years_until_zero >= base.years_until_zero);
        // Strict once there is positive equity to begin with
        if base.current_equity > Decimal::ZERO {
            prop_assert!(more.years_until_zero > base.years_until_zero);
        }
    }

    /// Projected equity is never negative, at any horizon.
    #[test]
    fn prop_projection_never_negative(
        equity_cents in 0i64..100_000_000_00,
        balance_cents in 0i64..100_000_000_00,
        years in 0u32..50,
    ) {
        let projected = decay::project_equity(
            Decimal::new(equity_cents, 2),
            Decimal::new(balance_cents, 2),
            dec!(8),
            Decimal::from(years),
        );
        prop_assert!(projected >= Decimal::ZERO);
    }
}
