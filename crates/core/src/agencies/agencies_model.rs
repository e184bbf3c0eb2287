//! Agency models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Real-estate agency that lists properties and receives investment funds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    pub id: String,
    pub name: String,
    pub email: String,
    pub description: String,
    pub wallet_balance: Decimal,
    #[serde(default)]
    pub property_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAgency {
    pub name: String,
    pub email: String,
    pub description: String,
    pub wallet_balance: Decimal,
    #[serde(default)]
    pub property_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_ids: Option<Vec<String>>,
}
