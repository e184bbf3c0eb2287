//! Investments module - stakes users hold in properties.

mod investments_model;

pub use investments_model::{InvestmentQuery, NewInvestment, UserInvestment};
