//! Sale-timing urgency scheduling for assets flagged for disposal.

use chrono::NaiveDate;

use super::pruning_model::{PruningEntry, Urgency};
use crate::holdings::{Asset, AssetStatus};

/// Calendar days from `today` to `deadline`, clamped at zero.
pub fn days_remaining(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days().max(0)
}

/// Builds the priority-ordered disposal list: for-sale assets with a
/// deadline, sorted by urgency rank then ascending days remaining. The sort
/// is stable, so assets tying on both keys keep their input order.
pub fn build_list(assets: &[Asset], today: NaiveDate) -> Vec<PruningEntry> {
    let mut entries: Vec<PruningEntry> = assets
        .iter()
        .filter(|asset| asset.status == AssetStatus::ForSale)
        .filter_map(|asset| {
            asset.disposal.as_ref().map(|plan| {
                let days = days_remaining(plan.deadline, today);
                PruningEntry {
                    asset_id: asset.id.clone(),
                    entity_id: asset.entity_id.clone(),
                    name: asset.name.clone(),
                    valuation: asset.valuation,
                    currency: asset.currency.clone(),
                    deadline: plan.deadline,
                    days_remaining: days,
                    urgency: Urgency::from_days_remaining(days),
                }
            })
        })
        .collect();

    entries.sort_by_key(|entry| (entry.urgency, entry.days_remaining));
    entries
}
