//! Input validators shared by every form.
//!
//! Validators never mutate their input and never perform I/O.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

use super::{FormErrors, SignInForm, SignUpForm, ValidationResult};
use crate::constants::MIN_PASSWORD_LENGTH;

lazy_static! {
    /// Minimal structural email shape: `local@domain.tld`, no whitespace, one `@`.
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern");
}

pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be at least 6 characters long";
pub const AMOUNT_NOT_POSITIVE_MESSAGE: &str = "Amount must be greater than 0";
pub const INVALID_AMOUNT_INPUT_MESSAGE: &str = "Please enter a valid amount";

/// Structural sanity check, not deliverability verification.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Only the minimum length is enforced; length is counted in characters.
pub fn validate_password(password: &str) -> ValidationResult {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return ValidationResult::invalid(PASSWORD_TOO_SHORT_MESSAGE);
    }
    ValidationResult::ok()
}

/// Checks that `amount` is positive and, when `max` is given, does not exceed it.
///
/// Without `max` no upper bound is applied; callers compare against the wallet
/// balance themselves.
pub fn validate_amount(amount: Decimal, max: Option<Decimal>) -> ValidationResult {
    if amount <= Decimal::ZERO {
        return ValidationResult::invalid(AMOUNT_NOT_POSITIVE_MESSAGE);
    }
    if let Some(max) = max {
        if amount > max {
            return ValidationResult::invalid(format!("Amount cannot exceed {}", max.normalize()));
        }
    }
    ValidationResult::ok()
}

/// Parses an amount typed into a text field. Blank or non-numeric text yields `None`.
pub fn parse_amount_input(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

pub fn validate_sign_up(form: &SignUpForm) -> FormErrors {
    let mut errors = FormErrors::new();

    if form.name.is_empty() {
        errors.insert("name", "Name is required");
    }

    check_email(&form.email, &mut errors);

    if form.password.is_empty() {
        errors.insert("password", "Password is required");
    } else {
        let result = validate_password(&form.password);
        if !result.valid {
            errors.insert("password", result.message.unwrap_or_default());
        }
    }

    if form.confirm_password.is_empty() {
        errors.insert("confirmPassword", "Please confirm your password");
    } else if form.password != form.confirm_password {
        errors.insert("confirmPassword", "Passwords do not match");
    }

    errors
}

/// Sign-in only requires a password to be present; its length is the server's concern.
pub fn validate_sign_in(form: &SignInForm) -> FormErrors {
    let mut errors = FormErrors::new();

    check_email(&form.email, &mut errors);

    if form.password.is_empty() {
        errors.insert("password", "Password is required");
    }

    errors
}

fn check_email(email: &str, errors: &mut FormErrors) {
    if email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !validate_email(email) {
        errors.insert("email", "Invalid email format");
    }
}
