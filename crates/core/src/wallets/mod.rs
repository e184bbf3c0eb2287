//! Wallets module - balance views and transfer payloads.

mod wallets_model;

pub use wallets_model::*;
