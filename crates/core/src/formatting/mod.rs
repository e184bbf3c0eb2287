//! Formatting module - locale display rules and pure formatters.

mod formatters;
mod formatting_model;

pub use formatters::{format_currency, format_date, format_number, format_percentage, Formatter};
pub use formatting_model::FormatConfig;
