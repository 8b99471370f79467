//! Repository traits implemented by the persistence collaborator.

use async_trait::async_trait;

use super::holdings_model::{PortfolioSnapshot, ShadowEquity};
use crate::errors::Result;

/// Read access to consistent portfolio snapshots.
#[async_trait]
pub trait SnapshotRepositoryTrait: Send + Sync {
    /// Returns a consistent snapshot of entities, assets and debts for the
    /// given family identifier.
    fn get_snapshot(&self, family_id: &str) -> Result<PortfolioSnapshot>;
}

/// Read/write access to shadow-equity records, keyed by loan identifier.
///
/// Accrual must be applied under a single-writer discipline per record:
/// at most one accrual per elapsed period, driven by the stored watermark.
#[async_trait]
pub trait ShadowEquityRepositoryTrait: Send + Sync {
    fn get_by_loan_id(&self, loan_id: &str) -> Result<Option<ShadowEquity>>;

    /// Persists the recomputed record and returns the stored copy.
    async fn save(&self, record: &ShadowEquity) -> Result<ShadowEquity>;
}
