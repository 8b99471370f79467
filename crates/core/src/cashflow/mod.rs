//! Cash flow module - heterogeneous income stream aggregation.

mod cashflow_aggregator;
mod cashflow_model;

pub use cashflow_aggregator::aggregate;
pub use cashflow_model::{
    CashFlowInputs, CashFlowSummary, ExternalPortfolio, IncomeStream, StreamContribution,
    StreamKind,
};
