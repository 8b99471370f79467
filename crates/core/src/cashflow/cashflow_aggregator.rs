//! Aggregation of independent recurring income streams.

use rust_decimal::Decimal;

use super::cashflow_model::{
    CashFlowInputs, CashFlowSummary, StreamContribution, StreamKind,
};
use crate::constants::{DECIMAL_PRECISION, MONTHS_PER_YEAR, PERCENT_SCALE};
use crate::errors::Result;
use crate::fx::CurrencyNormalizer;

/// Combines all streams into one monthly run-rate in `base_currency`.
///
/// External portfolios contribute their annual yield converted to base and
/// divided by 12. The sovereign salary equals the total: a gross figure,
/// with no expense deduction.
pub fn aggregate(
    inputs: &CashFlowInputs,
    normalizer: &CurrencyNormalizer,
    base_currency: &str,
) -> Result<CashFlowSummary> {
    let mut streams = Vec::new();
    let mut total_monthly = Decimal::ZERO;

    let groups = [
        (StreamKind::Contractual, &inputs.contractual),
        (StreamKind::RevenueShare, &inputs.revenue_share),
        (StreamKind::EventIncome, &inputs.event_income),
    ];
    for (kind, group) in groups {
        for stream in group.iter() {
            let monthly =
                normalizer.convert(stream.monthly_amount, &stream.currency, base_currency)?;
            let monthly = monthly.round_dp(DECIMAL_PRECISION);
            total_monthly += monthly;
            streams.push(StreamContribution {
                name: stream.name.clone(),
                kind,
                monthly_amount: monthly,
            });
        }
    }

    for portfolio in &inputs.external_portfolios {
        let value = normalizer.convert(portfolio.value, &portfolio.currency, base_currency)?;
        let monthly =
            (value * portfolio.annual_yield_pct / PERCENT_SCALE / MONTHS_PER_YEAR)
                .round_dp(DECIMAL_PRECISION);
        total_monthly += monthly;
        streams.push(StreamContribution {
            name: portfolio.name.clone(),
            kind: StreamKind::PortfolioYield,
            monthly_amount: monthly,
        });
    }

    let total_monthly = total_monthly.round_dp(DECIMAL_PRECISION);

    Ok(CashFlowSummary {
        base_currency: base_currency.to_string(),
        streams,
        total_monthly,
        monthly_sovereign_salary: total_monthly,
        annual_projection: (total_monthly * MONTHS_PER_YEAR).round_dp(DECIMAL_PRECISION),
    })
}
