//! Display formatting for amounts, percentages and dates.
//!
//! Every function here is pure: the same input always renders the same string.
//! The free functions use the platform [`FormatConfig`]; build a [`Formatter`]
//! to render with different locale rules.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use rust_decimal::{Decimal, RoundingStrategy};

use super::FormatConfig;
use crate::constants::{NUMBER_MAX_FRACTION_DIGITS, PERCENTAGE_DISPLAY_PRECISION};
use crate::errors::{Result, ValidationError};

lazy_static! {
    static ref DEFAULT_FORMATTER: Formatter = Formatter::default();
}

/// Naive date-time layouts accepted by [`Formatter::format_date`], tried in order.
const NAIVE_DATE_TIME_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Renders values with a fixed set of locale rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Whole-unit currency string, e.g. `Ksh 1,500`.
    ///
    /// Fractions are rounded to the nearest unit, halves away from zero.
    pub fn format_currency(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let digits = self.group_digits(&rounded.abs().trunc().to_string());
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!(
            "{}{}{}{}",
            sign, self.config.currency_symbol, self.config.symbol_separator, digits
        )
    }

    /// Long-form date such as `October 21, 2025`.
    ///
    /// Accepts RFC 3339 timestamps (the calendar date in the timestamp's own
    /// offset is used), naive date-times and plain `YYYY-MM-DD` dates. Anything
    /// else is rejected with a validation error.
    pub fn format_date(&self, date_string: &str) -> Result<String> {
        let date = parse_calendar_date(date_string.trim()).ok_or_else(|| {
            ValidationError::InvalidInput(format!("Invalid date: '{}'", date_string))
        })?;
        Ok(date.format(&self.config.long_date_pattern).to_string())
    }

    /// Fixed two-decimal percentage, e.g. `12.35%`. Values are not clamped.
    pub fn format_percentage(&self, value: Decimal) -> String {
        let rounded = value.round_dp_with_strategy(
            PERCENTAGE_DISPLAY_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        );
        let text = format!(
            "{:.prec$}",
            rounded,
            prec = PERCENTAGE_DISPLAY_PRECISION as usize
        );
        format!("{}%", text.replace('.', &self.config.decimal_separator))
    }

    /// Thousands-grouped number without a currency symbol.
    ///
    /// Up to three fraction digits are kept and trailing zeros are dropped.
    pub fn format_number(&self, num: Decimal) -> String {
        let rounded = num
            .round_dp_with_strategy(
                NUMBER_MAX_FRACTION_DIGITS,
                RoundingStrategy::MidpointAwayFromZero,
            )
            .normalize();
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let plain = rounded.abs().to_string();
        let (int_part, frac_part) = match plain.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (plain.as_str(), None),
        };

        let mut out = format!("{}{}", sign, self.group_digits(int_part));
        if let Some(frac) = frac_part {
            out.push_str(&self.config.decimal_separator);
            out.push_str(frac);
        }
        out
    }

    fn group_digits(&self, digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push_str(&self.config.group_separator);
            }
            out.push(ch);
        }
        out
    }
}

fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    for layout in NAIVE_DATE_TIME_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, layout) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// Formats `amount` as platform currency. See [`Formatter::format_currency`].
pub fn format_currency(amount: Decimal) -> String {
    DEFAULT_FORMATTER.format_currency(amount)
}

/// Formats an ISO-8601-like date string. See [`Formatter::format_date`].
pub fn format_date(date_string: &str) -> Result<String> {
    DEFAULT_FORMATTER.format_date(date_string)
}

pub fn format_percentage(value: Decimal) -> String {
    DEFAULT_FORMATTER.format_percentage(value)
}

pub fn format_number(num: Decimal) -> String {
    DEFAULT_FORMATTER.format_number(num)
}
