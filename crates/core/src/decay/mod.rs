//! Decay module - equity depletion under compounding debt ("Oakwood decay").

mod decay_engine;
mod decay_model;

pub use decay_engine::{compute, project_equity};
pub use decay_model::{AlertLevel, OakwoodDecay};
