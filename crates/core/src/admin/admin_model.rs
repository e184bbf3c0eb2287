use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Platform-wide figures shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_profit: Decimal,
    pub total_users: u64,
    pub total_agencies: u64,
    pub total_properties: u64,
}
