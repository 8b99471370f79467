use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::cashflow::{self, CashFlowInputs, CashFlowSummary};
use crate::decay::{self, OakwoodDecay};
use crate::errors::{Error, Result};
use crate::event_mode::{self, EventRevenueConfig};
use crate::fx::{CurrencyNormalizer, RateTable};
use crate::holdings::{
    Asset, Debt, ShadowEquity, ShadowEquityRepositoryTrait, SnapshotRepositoryTrait,
};
use crate::iht::{self, IhtConfig, IhtExposure};
use crate::portfolio::{self, PortfolioSummary};
use crate::pruning::{self, PruningEntry};
use crate::shadow_equity;

/// Facade over the calculators, wired to the persistence collaborator.
///
/// Reads snapshots, computes derived metrics, hands recomputed records back
/// for storage. Holds no long-lived state of its own besides the rate table
/// configuration inside the normalizer.
pub struct HoldingsEngine {
    snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
    shadow_equity_repository: Arc<dyn ShadowEquityRepositoryTrait>,
    normalizer: Arc<CurrencyNormalizer>,
    iht_config: IhtConfig,
}

impl HoldingsEngine {
    pub fn new(
        snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
        shadow_equity_repository: Arc<dyn ShadowEquityRepositoryTrait>,
        normalizer: Arc<CurrencyNormalizer>,
        iht_config: IhtConfig,
    ) -> Self {
        Self {
            snapshot_repository,
            shadow_equity_repository,
            normalizer,
            iht_config,
        }
    }

    /// Swaps the rate table without restarting the engine.
    pub fn reload_rates(&self, table: RateTable) -> Result<()> {
        self.normalizer.reload(table)
    }

    /// Consolidated position for one family, in the requested base currency.
    pub fn compute_portfolio_summary(
        &self,
        family_id: &str,
        base_currency: &str,
    ) -> Result<PortfolioSummary> {
        let snapshot = self.snapshot_repository.get_snapshot(family_id)?;
        log::debug!(
            "Aggregating {} assets and {} debts for family {} into {}",
            snapshot.assets.len(),
            snapshot.debts.len(),
            family_id,
            base_currency
        );
        portfolio::aggregate(&snapshot.assets, &snapshot.debts, &self.normalizer, base_currency)
    }

    pub fn compute_decay(
        &self,
        asset: &Asset,
        debt: &Debt,
        as_of: NaiveDate,
    ) -> Result<OakwoodDecay> {
        decay::compute(asset, debt, &self.normalizer, as_of)
    }

    pub fn project_equity(
        &self,
        current_equity: Decimal,
        balance: Decimal,
        annual_rate_pct: Decimal,
        years: Decimal,
    ) -> Decimal {
        decay::project_equity(current_equity, balance, annual_rate_pct, years)
    }

    /// Loads the shadow-equity record for `loan_id`, applies `months` of
    /// compound accrual, persists the result and returns the stored record.
    ///
    /// The caller passes the elapsed-month delta derived from the persisted
    /// watermark, and serializes calls per record; applying the same delta
    /// twice double-compounds.
    pub async fn accrue_shadow_equity(
        &self,
        loan_id: &str,
        months: u32,
        accrued_at: DateTime<Utc>,
    ) -> Result<ShadowEquity> {
        let record = self
            .shadow_equity_repository
            .get_by_loan_id(loan_id)?
            .ok_or_else(|| Error::NotFound(format!("Shadow equity record {loan_id}")))?;

        let accrual = shadow_equity::accrue(&record, months, accrued_at)?;
        log::info!(
            "Shadow equity {}: applied {} months, growth {} {}, value now {}",
            loan_id,
            accrual.months_applied,
            accrual.compounded_growth,
            record.currency,
            accrual.record.accumulated_value
        );

        self.shadow_equity_repository.save(&accrual.record).await
    }

    pub fn shadow_equity_ownership(
        &self,
        record: &ShadowEquity,
        entity_total_value: Decimal,
        entity_currency: &str,
    ) -> Result<Decimal> {
        shadow_equity::ownership_percentage(
            record,
            entity_total_value,
            entity_currency,
            &self.normalizer,
        )
    }

    /// Priority-ordered disposal list for one family.
    pub fn build_pruning_list(&self, family_id: &str, today: NaiveDate) -> Result<Vec<PruningEntry>> {
        let snapshot = self.snapshot_repository.get_snapshot(family_id)?;
        Ok(pruning::build_list(&snapshot.assets, today))
    }

    pub fn compute_event_mode_yield(&self, config: &EventRevenueConfig, event_days: u32) -> Decimal {
        event_mode::monthly_yield(config, event_days)
    }

    pub fn compute_annual_event_mode_yield(
        &self,
        config: &EventRevenueConfig,
        avg_events_per_month: Decimal,
    ) -> Decimal {
        event_mode::annual_yield(config, avg_events_per_month)
    }

    pub fn compute_cash_flow(
        &self,
        inputs: &CashFlowInputs,
        base_currency: &str,
    ) -> Result<CashFlowSummary> {
        cashflow::aggregate(inputs, &self.normalizer, base_currency)
    }

    /// Exposure over the configured threshold for personally-held assets.
    pub fn compute_iht_exposure(&self, family_id: &str) -> Result<IhtExposure> {
        let snapshot = self.snapshot_repository.get_snapshot(family_id)?;
        iht::compute(
            &snapshot.entities,
            &snapshot.assets,
            &self.normalizer,
            &self.iht_config,
        )
    }
}
