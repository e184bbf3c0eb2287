//! Flows module - the multi-call actions behind the investor screens.

mod investing;
mod portfolio;
mod wallet;

pub use investing::{InvestmentFlow, InvestmentOutcome, INSUFFICIENT_WALLET_BALANCE_MESSAGE};
pub use portfolio::PortfolioView;
pub use wallet::{WalletFlow, WalletOutcome, INSUFFICIENT_BALANCE_MESSAGE};
