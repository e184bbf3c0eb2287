//! Users module - investor and admin identities.

mod users_model;

pub use users_model::*;
