//! Agencies module - agency records managed from the admin console.

mod agencies_model;

pub use agencies_model::{Agency, AgencyUpdate, NewAgency};
