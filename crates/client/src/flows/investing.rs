use log::{info, warn};
use rust_decimal::Decimal;

use urbanroof_core::errors::{Result, ValidationError};
use urbanroof_core::investments::{NewInvestment, UserInvestment};
use urbanroof_core::users::User;
use urbanroof_core::validation::{parse_amount_input, validate_amount, INVALID_AMOUNT_INPUT_MESSAGE};
use urbanroof_core::wallets::Wallet;

use crate::api::{InvestmentApi, WalletApi};

pub const INSUFFICIENT_WALLET_BALANCE_MESSAGE: &str = "Insufficient wallet balance";

#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentOutcome {
    pub investment: UserInvestment,
    /// Wallet after the invested amount was deducted
    pub wallet: Wallet,
}

/// The invest action on a property page.
pub struct InvestmentFlow<'a, I: ?Sized, W: ?Sized> {
    investments: &'a I,
    wallets: &'a W,
}

impl<'a, I, W> InvestmentFlow<'a, I, W>
where
    I: InvestmentApi + ?Sized,
    W: WalletApi + ?Sized,
{
    pub fn new(investments: &'a I, wallets: &'a W) -> Self {
        Self {
            investments,
            wallets,
        }
    }

    /// Checks the typed amount against the user's wallet balance.
    pub fn check_amount(user: &User, raw_amount: &str) -> Result<Decimal> {
        let amount = parse_amount_input(raw_amount)
            .filter(|amount| validate_amount(*amount, None).is_valid())
            .ok_or_else(|| ValidationError::InvalidInput(INVALID_AMOUNT_INPUT_MESSAGE.to_string()))?;

        if !validate_amount(amount, Some(user.available_balance())).is_valid() {
            return Err(ValidationError::InvalidInput(
                INSUFFICIENT_WALLET_BALANCE_MESSAGE.to_string(),
            )
            .into());
        }
        Ok(amount)
    }

    /// Records the investment, then deducts it from the wallet.
    ///
    /// Nothing is sent when the amount fails validation. The two calls are not
    /// atomic: if the deduction fails the investment stays recorded.
    pub async fn invest(
        &self,
        user: &User,
        property_id: &str,
        raw_amount: &str,
    ) -> Result<InvestmentOutcome> {
        let amount = Self::check_amount(user, raw_amount)?;

        let investment = self
            .investments
            .add_investment(&NewInvestment {
                user_id: user.id.clone(),
                property_id: property_id.to_string(),
                investment_amount: amount,
            })
            .await?;

        let wallet = match self.wallets.withdraw_funds(&user.id, amount).await {
            Ok(wallet) => wallet,
            Err(err) => {
                warn!(
                    "Investment {} recorded but wallet deduction failed: {}",
                    investment.id, err
                );
                return Err(err);
            }
        };

        info!(
            "User {} invested {} in property {}",
            user.id, amount, property_id
        );
        Ok(InvestmentOutcome { investment, wallet })
    }
}
