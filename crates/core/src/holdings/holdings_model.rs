use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A user's stake in one property, as read from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRecord {
    pub user_id: String,
    pub property_id: String,
    pub investment_amount: Decimal,
}

/// Funding figures for one property.
///
/// `total_property_investment <= price` holds for a healthy backend but is not
/// relied upon here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTotals {
    pub property_id: String,
    pub property_name: String,
    pub total_property_investment: Decimal,
    pub price: Decimal,
}

/// Derived ownership of one property. Built on every read, never stored.
///
/// Field names match the backend's holdings endpoint, so the same type carries
/// server-computed and client-computed holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub property_id: String,
    pub property_name: String,
    pub amount_invested: Decimal,
    pub total_property_investment: Decimal,
    pub share_percentage: Decimal,
}

/// Dashboard/holdings screen figures for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub holdings: Vec<Holding>,
    pub total_invested: Decimal,
    pub property_count: usize,
}
