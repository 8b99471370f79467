//! Engine module - facade service over the calculators.

mod engine_service;

pub use engine_service::HoldingsEngine;
