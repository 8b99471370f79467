//! Event mode module - elevated pricing on event days.

mod calendar;
mod event_mode_calculator;
mod event_mode_model;

pub use calendar::{EventCalendar, FixedEventCalendar};
pub use event_mode_calculator::{annual_yield, monthly_yield, monthly_yield_for_dates};
pub use event_mode_model::EventRevenueConfig;
