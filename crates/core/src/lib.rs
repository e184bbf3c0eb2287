//! Urban Roof Core - domain records, holdings calculation, validation and formatting.
//!
//! This crate performs no I/O. Records are read from the Urban Roof API by the
//! `urbanroof-client` crate; this crate derives display data from them and checks
//! user input before it is sent back.

pub mod admin;
pub mod agencies;
pub mod constants;
pub mod errors;
pub mod formatting;
pub mod holdings;
pub mod investments;
pub mod properties;
pub mod users;
pub mod validation;
pub mod wallets;

// Re-export the pieces every screen uses
pub use formatting::{format_currency, format_date, format_number, format_percentage};
pub use holdings::*;
pub use validation::{validate_amount, validate_email, validate_password, ValidationResult};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
