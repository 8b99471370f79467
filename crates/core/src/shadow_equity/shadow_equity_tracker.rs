//! Monthly compounding of notional ("shadow") equity claims.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, MathematicalOps};

use super::shadow_equity_model::ShadowAccrual;
use crate::constants::{DECIMAL_PRECISION, MONTHS_PER_YEAR, PERCENT_SCALE};
use crate::errors::{Result, ValidationError};
use crate::fx::CurrencyNormalizer;
use crate::holdings::ShadowEquity;

/// Applies `months` of compound growth to a shadow-equity record.
///
/// Accrual is delta-driven: one call with `n` months is the cumulative
/// accrual for the whole elapsed period, not `n` repetitions of a one-month
/// call (growth always compounds off the loan principal). The caller tracks
/// elapsed months against the persisted watermark and passes the delta; the
/// engine never reads the wall clock, so `accrued_at` is the injected
/// timestamp stamped onto the updated record.
pub fn accrue(record: &ShadowEquity, months: u32, accrued_at: DateTime<Utc>) -> Result<ShadowAccrual> {
    record.validate()?;

    let monthly_rate = record.annual_rate_pct / PERCENT_SCALE / MONTHS_PER_YEAR;
    let monthly_accrual = record.loan_amount * monthly_rate;

    let growth_factor = (Decimal::ONE + monthly_rate).powi(months as i64);
    let compounded_growth = record.loan_amount * (growth_factor - Decimal::ONE);

    let mut updated = record.clone();
    updated.accumulated_value =
        (updated.accumulated_value + compounded_growth).round_dp(DECIMAL_PRECISION);
    updated.last_accrued_at = accrued_at;

    Ok(ShadowAccrual {
        record: updated,
        months_applied: months,
        monthly_rate,
        monthly_accrual: monthly_accrual.round_dp(DECIMAL_PRECISION),
        compounded_growth: compounded_growth.round_dp(DECIMAL_PRECISION),
    })
}

/// The ownership percentage the accumulated shadow value represents of an
/// entity's total value, after converting into the entity's reporting
/// currency.
pub fn ownership_percentage(
    record: &ShadowEquity,
    entity_total_value: Decimal,
    entity_currency: &str,
    normalizer: &CurrencyNormalizer,
) -> Result<Decimal> {
    if entity_total_value <= Decimal::ZERO {
        return Err(ValidationError::InvalidInput(format!(
            "Entity total value must be positive to compute dilution, found {}",
            entity_total_value
        ))
        .into());
    }

    let value = normalizer.convert(record.accumulated_value, &record.currency, entity_currency)?;
    Ok((value / entity_total_value * PERCENT_SCALE).round_dp(DECIMAL_PRECISION))
}
