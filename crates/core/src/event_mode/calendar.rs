//! Pluggable event-calendar feed.

use chrono::{Datelike, NaiveDate};

use crate::errors::Result;

/// Source of event dates for event-mode pricing.
///
/// The real feed lives outside the core (a venue's fixture list, a ticketing
/// API); the engine only consumes dates through this seam.
pub trait EventCalendar: Send + Sync {
    /// Event dates falling within the given calendar month.
    fn event_dates(&self, year: i32, month: u32) -> Result<Vec<NaiveDate>>;
}

/// Fixed-list calendar, for configuration-driven setups and tests.
#[derive(Debug, Clone, Default)]
pub struct FixedEventCalendar {
    dates: Vec<NaiveDate>,
}

impl FixedEventCalendar {
    pub fn new(dates: Vec<NaiveDate>) -> Self {
        FixedEventCalendar { dates }
    }
}

impl EventCalendar for FixedEventCalendar {
    fn event_dates(&self, year: i32, month: u32) -> Result<Vec<NaiveDate>> {
        Ok(self
            .dates
            .iter()
            .copied()
            .filter(|d| d.year() == year && d.month() == month)
            .collect())
    }
}
