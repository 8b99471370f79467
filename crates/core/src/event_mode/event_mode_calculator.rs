//! Blended yield for assets with elevated event-day pricing.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::event_mode_model::EventRevenueConfig;
use crate::constants::{DAYS_PER_MONTH, DECIMAL_PRECISION, MONTHS_PER_YEAR};

/// Monthly yield for a given number of event days, over a uniform 30-day
/// month (documented approximation): normal pricing on the remaining days,
/// event pricing on the event days, across all spaces.
pub fn monthly_yield(config: &EventRevenueConfig, event_days: u32) -> Decimal {
    blended_monthly_yield(config, Decimal::from(event_days.min(30)))
}

/// Monthly yield from explicit calendar dates: counts the distinct supplied
/// dates falling in the given month, then prices the blend.
pub fn monthly_yield_for_dates(
    config: &EventRevenueConfig,
    event_dates: &[NaiveDate],
    year: i32,
    month: u32,
) -> Decimal {
    let distinct: HashSet<NaiveDate> = event_dates
        .iter()
        .copied()
        .filter(|d| d.year() == year && d.month() == month)
        .collect();
    monthly_yield(config, distinct.len() as u32)
}

/// Annual projection from an average event-frequency assumption, used when
/// explicit dates are unavailable.
pub fn annual_yield(config: &EventRevenueConfig, avg_events_per_month: Decimal) -> Decimal {
    let avg = avg_events_per_month
        .max(Decimal::ZERO)
        .min(DAYS_PER_MONTH);
    (blended_monthly_yield(config, avg) * MONTHS_PER_YEAR).round_dp(DECIMAL_PRECISION)
}

fn blended_monthly_yield(config: &EventRevenueConfig, event_days: Decimal) -> Decimal {
    let spaces = Decimal::from(config.spaces);
    let normal_days = DAYS_PER_MONTH - event_days;
    (normal_days * config.normal_daily_rate * spaces
        + event_days * config.event_daily_rate * spaces)
        .round_dp(DECIMAL_PRECISION)
}
