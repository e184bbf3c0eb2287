use async_trait::async_trait;
use rust_decimal::Decimal;

use urbanroof_core::agencies::{Agency, AgencyUpdate, NewAgency};
use urbanroof_core::errors::Result;
use urbanroof_core::properties::Property;

use super::AgencyApi;
use crate::client::{segment, UrbanRoofClient};

#[async_trait]
impl AgencyApi for UrbanRoofClient {
    async fn create_agency(&self, agency: &NewAgency) -> Result<Agency> {
        self.post("/agencies", agency).await
    }

    async fn get_agency_by_id(&self, id: &str) -> Result<Agency> {
        self.get(&format!("/agencies/{}", segment(id))).await
    }

    async fn update_agency(&self, id: &str, update: &AgencyUpdate) -> Result<Agency> {
        self.put(&format!("/agencies/{}", segment(id)), update).await
    }

    async fn delete_agency(&self, id: &str) -> Result<bool> {
        self.delete(&format!("/agencies/{}", segment(id))).await
    }

    async fn withdraw_from_agency_wallet(&self, id: &str, amount: Decimal) -> Result<bool> {
        let path = format!(
            "/agencies/{}/withdraw?amount={}",
            segment(id),
            amount.normalize()
        );
        self.post_empty(&path).await
    }

    async fn list_agency_properties(&self, id: &str) -> Result<Vec<Property>> {
        self.get(&format!("/agencies/{}/properties", segment(id)))
            .await
    }
}
