//! Pruning module - scheduled-disposal workflow for assets marked for sale.

mod pruning_model;
mod pruning_scheduler;

pub use pruning_model::{PruningEntry, Urgency};
pub use pruning_scheduler::{build_list, days_remaining};
