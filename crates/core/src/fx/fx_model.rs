use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::fx_errors::FxError;

/// Process-wide currency configuration: every supported currency maps to its
/// conversion factor into the base currency (base itself has factor 1).
///
/// The table is plain data with no embedded business logic; calculators never
/// hardcode rates and go through [`crate::fx::CurrencyNormalizer`] instead.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RateTable {
    pub base_currency: String,
    pub factors: HashMap<String, Decimal>,
}

impl RateTable {
    /// Creates a table with only the base currency (factor 1).
    pub fn new(base_currency: &str) -> Self {
        let mut factors = HashMap::new();
        factors.insert(base_currency.to_string(), Decimal::ONE);
        RateTable {
            base_currency: base_currency.to_string(),
            factors,
        }
    }

    /// Builder-style insertion of a conversion factor into the base currency.
    pub fn with_factor(mut self, currency: &str, factor: Decimal) -> Self {
        self.factors.insert(currency.to_string(), factor);
        self
    }

    pub fn factor(&self, currency: &str) -> Option<Decimal> {
        self.factors.get(currency).copied()
    }

    pub fn supports(&self, currency: &str) -> bool {
        self.factors.contains_key(currency)
    }

    pub fn supported_currencies(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.factors.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// Checks the table is usable: the base currency maps to exactly 1 and
    /// every factor is strictly positive.
    pub fn validate(&self) -> Result<(), FxError> {
        match self.factors.get(&self.base_currency) {
            Some(factor) if *factor == Decimal::ONE => {}
            Some(factor) => {
                return Err(FxError::InvalidRate(format!(
                    "Base currency {} must have factor 1, found {}",
                    self.base_currency, factor
                )))
            }
            None => {
                return Err(FxError::InvalidRate(format!(
                    "Base currency {} is missing from its own rate table",
                    self.base_currency
                )))
            }
        }

        for (code, factor) in &self.factors {
            if *factor <= Decimal::ZERO {
                return Err(FxError::InvalidRate(format!(
                    "Factor for {} must be positive, found {}",
                    code, factor
                )));
            }
        }
        Ok(())
    }
}
