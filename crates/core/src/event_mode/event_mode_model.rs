use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Revenue configuration for an asset that charges elevated pricing on
/// event days (e.g. a car park next to a stadium).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRevenueConfig {
    pub normal_daily_rate: Decimal,
    pub event_daily_rate: Decimal,
    /// Number of lettable spaces/units.
    pub spaces: u32,
}
