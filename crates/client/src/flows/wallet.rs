use log::info;
use rust_decimal::Decimal;

use urbanroof_core::errors::{Result, ValidationError};
use urbanroof_core::users::User;
use urbanroof_core::validation::{parse_amount_input, validate_amount, INVALID_AMOUNT_INPUT_MESSAGE};
use urbanroof_core::wallets::{deposit_success_message, withdraw_success_message, Wallet};

use crate::api::WalletApi;

pub const INSUFFICIENT_BALANCE_MESSAGE: &str = "Insufficient balance";

#[derive(Debug, Clone, PartialEq)]
pub struct WalletOutcome {
    pub wallet: Wallet,
    /// Confirmation shown to the user
    pub message: String,
}

/// Deposit and withdraw actions on the wallet page.
pub struct WalletFlow<'a, W: ?Sized> {
    wallets: &'a W,
}

fn parse_positive(raw_amount: &str) -> Result<Decimal> {
    parse_amount_input(raw_amount)
        .filter(|amount| validate_amount(*amount, None).is_valid())
        .ok_or_else(|| ValidationError::InvalidInput(INVALID_AMOUNT_INPUT_MESSAGE.to_string()).into())
}

impl<'a, W: WalletApi + ?Sized> WalletFlow<'a, W> {
    pub fn new(wallets: &'a W) -> Self {
        Self { wallets }
    }

    pub async fn deposit(&self, user: &User, raw_amount: &str) -> Result<WalletOutcome> {
        let amount = parse_positive(raw_amount)?;
        let wallet = self.wallets.deposit_funds(&user.id, amount).await?;
        info!("User {} deposited {}", user.id, amount);
        Ok(WalletOutcome {
            wallet,
            message: deposit_success_message(amount),
        })
    }

    pub async fn withdraw(&self, user: &User, raw_amount: &str) -> Result<WalletOutcome> {
        let amount = parse_positive(raw_amount)?;
        if !validate_amount(amount, Some(user.available_balance())).is_valid() {
            return Err(ValidationError::InvalidInput(INSUFFICIENT_BALANCE_MESSAGE.to_string()).into());
        }
        let wallet = self.wallets.withdraw_funds(&user.id, amount).await?;
        info!("User {} withdrew {}", user.id, amount);
        Ok(WalletOutcome {
            wallet,
            message: withdraw_success_message(amount),
        })
    }
}
