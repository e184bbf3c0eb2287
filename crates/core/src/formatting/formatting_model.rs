//! Display locale configuration.

use serde::{Deserialize, Serialize};

/// Locale rules used when rendering amounts and dates.
///
/// The default is the platform configuration: Kenyan shillings rendered the way
/// the `en-KE` locale shows them (`Ksh 1,500`, `October 21, 2025`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatConfig {
    /// ISO 4217 code of the platform currency
    pub currency_code: String,
    /// Symbol placed in front of currency amounts
    pub currency_symbol: String,
    /// Placed between the symbol and the digits
    pub symbol_separator: String,
    pub group_separator: String,
    pub decimal_separator: String,
    /// chrono format string for long-form dates
    pub long_date_pattern: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            currency_code: "KES".to_string(),
            currency_symbol: "Ksh".to_string(),
            symbol_separator: " ".to_string(),
            group_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            long_date_pattern: "%B %-d, %Y".to_string(),
        }
    }
}
