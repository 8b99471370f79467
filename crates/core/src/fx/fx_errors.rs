use thiserror::Error;

/// Errors from currency normalization.
#[derive(Error, Debug)]
pub enum FxError {
    /// The currency code is not present in the configured rate table.
    /// There is deliberately no 1:1 fallback for unknown currencies.
    #[error("Currency '{0}' is not in the configured rate table")]
    UnsupportedCurrency(String),

    #[error("Invalid conversion factor: {0}")]
    InvalidRate(String),

    #[error("Rate table cache error: {0}")]
    CacheError(String),
}
