use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DECAY_CRITICAL_YEARS, DECAY_WARNING_YEARS};

/// Severity of an equity-decay projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertLevel {
    Critical,
    Warning,
    Safe,
}

impl AlertLevel {
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            AlertLevel::Critical => "CRITICAL",
            AlertLevel::Warning => "WARNING",
            AlertLevel::Safe => "SAFE",
        }
    }

    /// Classifies years-until-zero. Boundaries are exclusive-below:
    /// exactly 5.0 years is Warning, exactly 10.0 is Safe.
    pub fn from_years_until_zero(years: Decimal) -> Self {
        if years < DECAY_CRITICAL_YEARS {
            AlertLevel::Critical
        } else if years < DECAY_WARNING_YEARS {
            AlertLevel::Warning
        } else {
            AlertLevel::Safe
        }
    }
}

/// Projected depletion of an asset's equity by compounding interest on a
/// debt secured against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OakwoodDecay {
    pub asset_id: String,
    pub debt_id: String,
    pub currency: String,
    pub current_equity: Decimal,
    pub daily_interest_accrual: Decimal,
    /// Daily accrual over a uniform 30-day month. A documented
    /// approximation, not calendar-accurate.
    pub monthly_decay: Decimal,
    /// Closed-form approximation: equity divided by annual interest cost.
    /// Zero when equity or the interest cost is not positive.
    pub years_until_zero: Decimal,
    pub alert: AlertLevel,
    pub as_of: NaiveDate,
}
