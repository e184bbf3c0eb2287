/// Role claim that unlocks the admin console in the UI
pub const ADMIN_ROLE: &str = "ADMIN";

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Decimal places shown for percentages
pub const PERCENTAGE_DISPLAY_PRECISION: u32 = 2;

/// Maximum fraction digits shown by plain number formatting
pub const NUMBER_MAX_FRACTION_DIGITS: u32 = 3;

/// Upper bound of a progress ratio, in percent
pub const MAX_PROGRESS_PERCENT: u32 = 100;
