use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::ShadowEquity;

/// Outcome of one accrual pass over a shadow-equity record.
///
/// `monthly_accrual` is the instantaneous simple accrual for a single month;
/// `compounded_growth` is the delta actually applied to the record's
/// accumulated value for the elapsed period. Both are reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowAccrual {
    pub record: ShadowEquity,
    pub months_applied: u32,
    pub monthly_rate: Decimal,
    pub monthly_accrual: Decimal,
    pub compounded_growth: Decimal,
}
