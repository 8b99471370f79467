use std::sync::RwLock;

use rust_decimal::Decimal;

use super::fx_errors::FxError;
use super::fx_model::RateTable;
use crate::errors::Result;

/// Converts monetary amounts between the currencies enumerated in the
/// configured [`RateTable`].
///
/// All cross-currency arithmetic in the engine funnels through this type so
/// that no two calculators can drift apart on the same conversion. The table
/// is swappable at runtime without restarting the engine.
///
/// Unknown currencies fail loudly with [`FxError::UnsupportedCurrency`];
/// there is no silent 1:1 fallback.
pub struct CurrencyNormalizer {
    table: RwLock<RateTable>,
}

impl CurrencyNormalizer {
    pub fn new(table: RateTable) -> Result<Self> {
        table.validate()?;
        Ok(CurrencyNormalizer {
            table: RwLock::new(table),
        })
    }

    pub fn base_currency(&self) -> Result<String> {
        let table = self.read_table()?;
        Ok(table.base_currency.clone())
    }

    pub fn supports(&self, currency: &str) -> Result<bool> {
        let table = self.read_table()?;
        Ok(table.supports(currency))
    }

    /// Swaps the rate table atomically. The old table stays in place if the
    /// replacement fails validation.
    pub fn reload(&self, table: RateTable) -> Result<()> {
        table.validate()?;
        let mut guard = self
            .table
            .write()
            .map_err(|e| FxError::CacheError(e.to_string()))?;
        log::debug!(
            "Reloading rate table: base {}, {} currencies",
            table.base_currency,
            table.factors.len()
        );
        *guard = table;
        Ok(())
    }

    /// Unit conversion rate between two supported currencies.
    pub fn rate(&self, from_currency: &str, to_currency: &str) -> Result<Decimal> {
        if from_currency == to_currency {
            return Ok(Decimal::ONE);
        }

        let table = self.read_table()?;
        let from_factor = table
            .factor(from_currency)
            .ok_or_else(|| FxError::UnsupportedCurrency(from_currency.to_string()))?;
        let to_factor = table
            .factor(to_currency)
            .ok_or_else(|| FxError::UnsupportedCurrency(to_currency.to_string()))?;

        if to_factor.is_zero() {
            return Err(FxError::InvalidRate(format!(
                "Factor for {} is zero",
                to_currency
            ))
            .into());
        }

        Ok(from_factor / to_factor)
    }

    /// Converts an amount between two supported currencies.
    /// Identity when the codes are equal.
    pub fn convert(&self, amount: Decimal, from_currency: &str, to_currency: &str) -> Result<Decimal> {
        if from_currency == to_currency {
            return Ok(amount);
        }
        let rate = self.rate(from_currency, to_currency)?;
        Ok(amount * rate)
    }

    fn read_table(&self) -> Result<std::sync::RwLockReadGuard<'_, RateTable>> {
        self.table
            .read()
            .map_err(|e| FxError::CacheError(e.to_string()).into())
    }
}
