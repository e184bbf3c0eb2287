//! Wallet models. Balances are owned by the backend; these are read-only views.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::formatting::format_currency;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency_id: Option<String>,
    pub balance: Decimal,
}

/// Deposit or withdraw request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransfer {
    pub user_id: String,
    pub amount: Decimal,
}

/// Ledger entry returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub agency_id: String,
    pub property_id: String,
    pub amount: Decimal,
    pub transaction_type: String,
    pub created_at: String,
}

pub fn deposit_success_message(amount: Decimal) -> String {
    format!(
        "Successfully deposited {} to your wallet",
        format_currency(amount)
    )
}

pub fn withdraw_success_message(amount: Decimal) -> String {
    format!(
        "Successfully withdrew {} from your wallet",
        format_currency(amount)
    )
}
