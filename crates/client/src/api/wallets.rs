use async_trait::async_trait;
use rust_decimal::Decimal;

use urbanroof_core::errors::Result;
use urbanroof_core::wallets::{Wallet, WalletTransfer};

use super::WalletApi;
use crate::client::{segment, UrbanRoofClient};

#[async_trait]
impl WalletApi for UrbanRoofClient {
    async fn get_wallet_by_id(&self, id: &str) -> Result<Wallet> {
        self.get(&format!("/wallets/{}", segment(id))).await
    }

    async fn deposit_funds(&self, user_id: &str, amount: Decimal) -> Result<Wallet> {
        let transfer = WalletTransfer {
            user_id: user_id.to_string(),
            amount,
        };
        self.post("/wallets/deposit", &transfer).await
    }

    async fn withdraw_funds(&self, user_id: &str, amount: Decimal) -> Result<Wallet> {
        let transfer = WalletTransfer {
            user_id: user_id.to_string(),
            amount,
        };
        self.post("/wallets/withdraw", &transfer).await
    }
}
