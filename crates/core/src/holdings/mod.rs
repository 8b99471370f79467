//! Holdings module - domain models and repository traits.

mod holdings_model;
mod holdings_model_tests;
mod holdings_traits;

pub use holdings_model::{
    Acquisition, Asset, AssetStatus, Debt, DebtKind, DisposalPlan, Entity, EntityKind,
    MinorityStake, OwnershipSplit, PortfolioSnapshot, ShadowEquity, Tier,
};
pub use holdings_traits::{ShadowEquityRepositoryTrait, SnapshotRepositoryTrait};
