//! User investment models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::InvestmentRecord;

/// One stake a user holds in a property, as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInvestment {
    pub id: String,
    pub user_id: String,
    pub property_id: String,
    pub investment_amount: Decimal,
}

impl From<&UserInvestment> for InvestmentRecord {
    fn from(investment: &UserInvestment) -> Self {
        InvestmentRecord {
            user_id: investment.user_id.clone(),
            property_id: investment.property_id.clone(),
            investment_amount: investment.investment_amount,
        }
    }
}

/// Payload for recording a new investment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub user_id: String,
    pub property_id: String,
    pub investment_amount: Decimal,
}

/// Admin filter over investments; unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
}

impl InvestmentQuery {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        InvestmentQuery {
            user_id: Some(user_id.into()),
            property_id: None,
        }
    }

    pub fn for_property(property_id: impl Into<String>) -> Self {
        InvestmentQuery {
            user_id: None,
            property_id: Some(property_id.into()),
        }
    }
}
