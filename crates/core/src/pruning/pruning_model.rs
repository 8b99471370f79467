use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{PRUNING_CRITICAL_DAYS, PRUNING_HIGH_DAYS};

/// Disposal urgency. Declaration order is rank order: Critical sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Critical,
    High,
    Medium,
}

impl Urgency {
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            Urgency::Critical => "CRITICAL",
            Urgency::High => "HIGH",
            Urgency::Medium => "MEDIUM",
        }
    }

    pub fn from_days_remaining(days: i64) -> Self {
        if days < PRUNING_CRITICAL_DAYS {
            Urgency::Critical
        } else if days < PRUNING_HIGH_DAYS {
            Urgency::High
        } else {
            Urgency::Medium
        }
    }
}

/// Derived view over a for-sale asset with a disposal deadline.
/// Computed on demand, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PruningEntry {
    pub asset_id: String,
    pub entity_id: String,
    pub name: String,
    pub valuation: Decimal,
    pub currency: String,
    pub deadline: NaiveDate,
    /// Calendar days to the deadline, clamped at zero for overdue items.
    pub days_remaining: i64,
    pub urgency: Urgency,
}
