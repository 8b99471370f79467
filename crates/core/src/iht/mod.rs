//! IHT module - inheritance-tax threshold exposure.

mod iht_calculator;
mod iht_model;

pub use iht_calculator::compute;
pub use iht_model::{IhtConfig, IhtExposure, PersonalAssetContribution};
