use async_trait::async_trait;
use rust_decimal::Decimal;

use urbanroof_core::errors::Result;
use urbanroof_core::holdings::Holding;
use urbanroof_core::investments::{NewInvestment, UserInvestment};

use super::InvestmentApi;
use crate::client::{segment, UrbanRoofClient};

#[async_trait]
impl InvestmentApi for UrbanRoofClient {
    async fn add_investment(&self, investment: &NewInvestment) -> Result<UserInvestment> {
        self.post("/user-investments", investment).await
    }

    async fn get_user_investments(&self, user_id: &str) -> Result<Vec<UserInvestment>> {
        self.get(&format!("/user-investments/user/{}", segment(user_id)))
            .await
    }

    async fn get_holdings(&self, user_id: &str) -> Result<Vec<Holding>> {
        self.get(&format!("/v1/users/holdings/{}", segment(user_id)))
            .await
    }

    // The endpoint takes the new amount as a bare JSON number.
    async fn update_investment_amount(&self, id: &str, amount: Decimal) -> Result<UserInvestment> {
        self.put(&format!("/user-investments/{}/amount", segment(id)), &amount)
            .await
    }

    async fn delete_investment(&self, id: &str) -> Result<()> {
        self.delete_unit(&format!("/user-investments/{}", segment(id)))
            .await
    }
}
