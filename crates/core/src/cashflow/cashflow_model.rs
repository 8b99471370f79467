use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category of a recurring income stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StreamKind {
    /// Fixed contractual income (a lease with a set monthly payment).
    Contractual,
    /// Variable revenue-share income (a royalty on turnover).
    RevenueShare,
    /// Variable event income (event-mode pricing).
    EventIncome,
    /// Yield on an externally-managed portfolio.
    PortfolioYield,
}

impl StreamKind {
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            StreamKind::Contractual => "CONTRACTUAL",
            StreamKind::RevenueShare => "REVENUE_SHARE",
            StreamKind::EventIncome => "EVENT_INCOME",
            StreamKind::PortfolioYield => "PORTFOLIO_YIELD",
        }
    }
}

/// A recurring income stream in its native currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStream {
    pub name: String,
    pub monthly_amount: Decimal,
    pub currency: String,
}

/// An externally-managed portfolio contributing yield, not principal.
/// `annual_yield_pct` is in percent (8 means 8%).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalPortfolio {
    pub name: String,
    pub value: Decimal,
    pub currency: String,
    pub annual_yield_pct: Decimal,
}

/// Heterogeneous income streams to be combined into one run-rate.
/// The aggregator performs no validation beyond numeric addition; stream
/// amounts are the caller's responsibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowInputs {
    #[serde(default)]
    pub contractual: Vec<IncomeStream>,
    #[serde(default)]
    pub revenue_share: Vec<IncomeStream>,
    #[serde(default)]
    pub event_income: Vec<IncomeStream>,
    #[serde(default)]
    pub external_portfolios: Vec<ExternalPortfolio>,
}

/// One stream's contribution to the monthly run-rate, in the base currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamContribution {
    pub name: String,
    pub kind: StreamKind,
    pub monthly_amount: Decimal,
}

/// Combined net cash flow across all streams.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowSummary {
    pub base_currency: String,
    pub streams: Vec<StreamContribution>,
    pub total_monthly: Decimal,
    /// Equal to `total_monthly`: the figure is explicitly gross of
    /// expenses, not net.
    pub monthly_sovereign_salary: Decimal,
    pub annual_projection: Decimal,
}
