//! Validation module - input checks for every form that submits to the API.

mod validation_model;
mod validators;

pub use validation_model::{FormErrors, SignInForm, SignUpForm, ValidationResult};
pub use validators::*;

#[cfg(test)]
mod validators_tests;
