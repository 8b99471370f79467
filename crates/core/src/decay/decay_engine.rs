//! Equity decay under compounding debt.

use chrono::NaiveDate;
use rust_decimal::{Decimal, MathematicalOps};

use super::decay_model::{AlertLevel, OakwoodDecay};
use crate::constants::{DAYS_PER_MONTH, DAYS_PER_YEAR, DECIMAL_PRECISION};
use crate::errors::{CalculatorError, Result};
use crate::fx::CurrencyNormalizer;
use crate::holdings::{Asset, Debt};

/// Computes the decay profile for an asset and the compounding debt secured
/// against it. The debt balance is brought into the asset's currency first.
///
/// Fails for non-compounding debts; the projection is meaningless without
/// interest rolling into the balance.
pub fn compute(
    asset: &Asset,
    debt: &Debt,
    normalizer: &CurrencyNormalizer,
    as_of: NaiveDate,
) -> Result<OakwoodDecay> {
    asset.validate()?;
    debt.validate()?;

    if !debt.compounding {
        return Err(CalculatorError::InvalidDebtType {
            debt_id: debt.id.clone(),
            kind: debt.kind.as_db_str().to_string(),
        }
        .into());
    }

    let balance = normalizer.convert(debt.balance, &debt.currency, &asset.currency)?;
    let annual_rate = debt.annual_rate();

    let current_equity = asset.valuation - balance;
    let daily_rate = annual_rate / DAYS_PER_YEAR;
    let daily_interest_accrual = balance * daily_rate;
    let monthly_decay = daily_interest_accrual * DAYS_PER_MONTH;

    // Equity run-rate over annual interest cost. A closed-form
    // approximation of the depletion horizon, not a root-solve of the
    // compounding equation.
    let annual_interest_cost = balance * annual_rate;
    let years_until_zero =
        if annual_interest_cost > Decimal::ZERO && current_equity > Decimal::ZERO {
            current_equity / annual_interest_cost
        } else {
            Decimal::ZERO
        };

    Ok(OakwoodDecay {
        asset_id: asset.id.clone(),
        debt_id: debt.id.clone(),
        currency: asset.currency.clone(),
        current_equity: current_equity.round_dp(DECIMAL_PRECISION),
        daily_interest_accrual: daily_interest_accrual.round_dp(DECIMAL_PRECISION),
        monthly_decay: monthly_decay.round_dp(DECIMAL_PRECISION),
        years_until_zero: years_until_zero.round_dp(DECIMAL_PRECISION),
        alert: AlertLevel::from_years_until_zero(years_until_zero),
        as_of,
    })
}

/// Projects remaining equity `years` from now: the debt grows by compound
/// interest while the asset value is held constant at its current level
/// (`current_equity + balance`). Equity never projects below zero.
pub fn project_equity(
    current_equity: Decimal,
    balance: Decimal,
    annual_rate_pct: Decimal,
    years: Decimal,
) -> Decimal {
    let annual_rate = annual_rate_pct / crate::constants::PERCENT_SCALE;
    let asset_value = current_equity + balance;
    let future_debt = balance * (Decimal::ONE + annual_rate).powd(years);
    (asset_value - future_debt)
        .max(Decimal::ZERO)
        .round_dp(DECIMAL_PRECISION)
}
