use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Day-count convention for interest accrual (actual/365 fixed)
pub const DAYS_PER_YEAR: Decimal = dec!(365);

/// Uniform month length used by decay and event-mode projections.
/// A declared simplification, not calendar-accurate.
pub const DAYS_PER_MONTH: Decimal = dec!(30);

pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Equity decay alert thresholds, in years until equity depletion.
/// Boundaries are exclusive-below: exactly 5.0 years is Warning, not Critical.
pub const DECAY_CRITICAL_YEARS: Decimal = dec!(5);
pub const DECAY_WARNING_YEARS: Decimal = dec!(10);

/// Disposal urgency thresholds, in days to deadline.
pub const PRUNING_CRITICAL_DAYS: i64 = 90;
pub const PRUNING_HIGH_DAYS: i64 = 180;

pub const PERCENT_SCALE: Decimal = dec!(100);
