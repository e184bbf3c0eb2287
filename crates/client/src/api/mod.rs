//! Urban Roof endpoints, one trait per backend service.

mod admin;
mod agencies;
mod api_traits;
mod auth;
mod investments;
mod properties;
mod wallets;

pub use api_traits::{AdminApi, AgencyApi, AuthApi, InvestmentApi, PropertyApi, WalletApi};
