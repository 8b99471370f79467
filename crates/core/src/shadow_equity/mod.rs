//! Shadow equity module - notional compounding claims against entity value.

mod shadow_equity_model;
mod shadow_equity_tracker;

pub use shadow_equity_model::ShadowAccrual;
pub use shadow_equity_tracker::{accrue, ownership_percentage};
