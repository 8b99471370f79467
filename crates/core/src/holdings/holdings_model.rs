//! Holdings domain models: entities, assets, debts and shadow-equity records.
//!
//! Records are immutable snapshots supplied by the persistence collaborator;
//! the engine validates them at the boundary and never mutates the
//! authoritative copy.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::PERCENT_SCALE;
use crate::errors::{Result, ValidationError};

/// Legal wrapper a holding sits inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Corporate,
    Individual,
    TrustFoundation,
}

impl EntityKind {
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            EntityKind::Corporate => "CORPORATE",
            EntityKind::Individual => "INDIVIDUAL",
            EntityKind::TrustFoundation => "TRUST_FOUNDATION",
        }
    }

    /// Personal (non-corporate) entities carry inheritance-tax exposure.
    pub const fn is_personal(&self) -> bool {
        matches!(self, EntityKind::Individual)
    }
}

/// Lifecycle status of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    #[default]
    Operational,
    Leased,
    StrategicHold,
    Renovation,
    /// Flagged for disposal; enters the pruning schedule once a deadline is set.
    ForSale,
}

impl AssetStatus {
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            AssetStatus::Operational => "OPERATIONAL",
            AssetStatus::Leased => "LEASED",
            AssetStatus::StrategicHold => "STRATEGIC_HOLD",
            AssetStatus::Renovation => "RENOVATION",
            AssetStatus::ForSale => "FOR_SALE",
        }
    }
}

/// Qualitative risk/strategic classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Crown,
    #[default]
    Core,
    Opportunistic,
    Legacy,
}

impl Tier {
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            Tier::Crown => "CROWN",
            Tier::Core => "CORE",
            Tier::Opportunistic => "OPPORTUNISTIC",
            Tier::Legacy => "LEGACY",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: String,
    pub name: String,
    pub kind: EntityKind,
    pub reporting_currency: String,
}

/// A minority owner's stake in an asset, as a percentage of the whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinorityStake {
    pub owner: String,
    pub percentage: Decimal,
}

/// Per-asset ownership split. Percentages sum to at most 100
/// (conventionally exactly 100); enforced at creation, not re-checked by
/// downstream aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipSplit {
    pub principal_pct: Decimal,
    pub minority: Vec<MinorityStake>,
}

impl OwnershipSplit {
    /// Sole-ownership split (principal holds 100%).
    pub fn sole() -> Self {
        OwnershipSplit {
            principal_pct: PERCENT_SCALE,
            minority: Vec::new(),
        }
    }

    pub fn minority_total(&self) -> Decimal {
        self.minority.iter().map(|s| s.percentage).sum()
    }

    pub fn total(&self) -> Decimal {
        self.principal_pct + self.minority_total()
    }

    pub fn validate(&self) -> Result<()> {
        if self.principal_pct < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Principal ownership percentage cannot be negative: {}",
                self.principal_pct
            ))
            .into());
        }
        for stake in &self.minority {
            if stake.percentage < Decimal::ZERO {
                return Err(ValidationError::InvalidInput(format!(
                    "Ownership percentage for {} cannot be negative: {}",
                    stake.owner, stake.percentage
                ))
                .into());
            }
        }
        if self.total() > PERCENT_SCALE {
            return Err(ValidationError::InvalidInput(format!(
                "Ownership percentages sum to {}, exceeding 100",
                self.total()
            ))
            .into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Acquisition {
    pub price: Decimal,
    pub date: NaiveDate,
}

/// Structured disposal intent. Replaces the free-form metadata bag that used
/// to carry the deadline; validated at the boundary like any other field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisposalPlan {
    pub deadline: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub entity_id: String,
    pub name: String,
    pub valuation: Decimal,
    pub currency: String,
    pub ownership: OwnershipSplit,
    pub status: AssetStatus,
    pub tier: Tier,
    pub location: Option<String>,
    pub acquisition: Option<Acquisition>,
    pub monthly_payment: Option<Decimal>,
    pub annual_turnover: Option<Decimal>,
    pub disposal: Option<DisposalPlan>,
}

impl Asset {
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        if self.entity_id.is_empty() {
            return Err(ValidationError::MissingField("entityId".to_string()).into());
        }
        if self.currency.is_empty() {
            return Err(ValidationError::MissingField("currency".to_string()).into());
        }
        if self.valuation < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Asset {} has negative valuation {}",
                self.id, self.valuation
            ))
            .into());
        }
        self.ownership.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebtKind {
    Fixed,
    Variable,
    EquityRelease,
}

impl DebtKind {
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            DebtKind::Fixed => "FIXED",
            DebtKind::Variable => "VARIABLE",
            DebtKind::EquityRelease => "EQUITY_RELEASE",
        }
    }
}

/// A liability secured against an asset and/or owed by an entity.
///
/// `annual_rate_pct` is the annual interest rate in percent (8 means 8%).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub asset_id: Option<String>,
    pub entity_id: Option<String>,
    pub creditor: String,
    pub principal: Decimal,
    pub balance: Decimal,
    pub annual_rate_pct: Decimal,
    pub kind: DebtKind,
    pub compounding: bool,
    pub currency: String,
    pub maturity: Option<NaiveDate>,
}

impl Debt {
    /// Annual rate as a fraction (8% -> 0.08).
    pub fn annual_rate(&self) -> Decimal {
        self.annual_rate_pct / PERCENT_SCALE
    }

    pub fn validate(&self) -> Result<()> {
        if self.asset_id.is_none() && self.entity_id.is_none() {
            return Err(
                ValidationError::MissingField("assetId or entityId".to_string()).into(),
            );
        }
        if self.principal < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Debt {} has negative principal {}",
                self.id, self.principal
            ))
            .into());
        }
        if self.balance < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Debt {} has negative balance {}",
                self.id, self.balance
            ))
            .into());
        }
        if self.annual_rate_pct < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Debt {} has negative interest rate {}",
                self.id, self.annual_rate_pct
            ))
            .into());
        }
        Ok(())
    }
}

/// A notional, compounding claim against an entity's value arising from an
/// undrawn or off-book loan, tracked separately from recorded debt.
///
/// The engine recomputes and hands the record back for storage; the
/// persistence collaborator owns the authoritative copy and the caller owns
/// the last-accrual watermark.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowEquity {
    pub id: String,
    pub entity_id: String,
    pub loan_amount: Decimal,
    pub annual_rate_pct: Decimal,
    pub currency: String,
    pub accumulated_value: Decimal,
    pub last_accrued_at: DateTime<Utc>,
}

impl ShadowEquity {
    /// Opens a new shadow-equity record at the loan amount, with a freshly
    /// minted identifier and the accrual watermark set to `opened_at`.
    pub fn open(
        entity_id: &str,
        loan_amount: Decimal,
        annual_rate_pct: Decimal,
        currency: &str,
        opened_at: DateTime<Utc>,
    ) -> Self {
        ShadowEquity {
            id: uuid::Uuid::new_v4().to_string(),
            entity_id: entity_id.to_string(),
            loan_amount,
            annual_rate_pct,
            currency: currency.to_string(),
            accumulated_value: loan_amount,
            last_accrued_at: opened_at,
        }
    }

    pub fn annual_rate(&self) -> Decimal {
        self.annual_rate_pct / PERCENT_SCALE
    }

    pub fn validate(&self) -> Result<()> {
        if self.loan_amount < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Shadow equity {} has negative loan amount {}",
                self.id, self.loan_amount
            ))
            .into());
        }
        if self.annual_rate_pct < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Shadow equity {} has negative interest rate {}",
                self.id, self.annual_rate_pct
            ))
            .into());
        }
        Ok(())
    }
}

/// Consistent point-in-time read of a family's entities, assets and debts,
/// produced by the persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub family_id: String,
    pub entities: Vec<Entity>,
    pub assets: Vec<Asset>,
    pub debts: Vec<Debt>,
}

impl PortfolioSnapshot {
    pub fn entity(&self, entity_id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == entity_id)
    }

    pub fn debts_for_asset(&self, asset_id: &str) -> Vec<&Debt> {
        self.debts
            .iter()
            .filter(|d| d.asset_id.as_deref() == Some(asset_id))
            .collect()
    }
}
