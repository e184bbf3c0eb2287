use async_trait::async_trait;

use urbanroof_core::admin::DashboardMetrics;
use urbanroof_core::agencies::Agency;
use urbanroof_core::errors::Result;
use urbanroof_core::investments::{InvestmentQuery, UserInvestment};
use urbanroof_core::properties::Property;

use super::AdminApi;
use crate::client::{segment, UrbanRoofClient};

#[async_trait]
impl AdminApi for UrbanRoofClient {
    async fn get_dashboard_metrics(&self) -> Result<DashboardMetrics> {
        self.get("/admin/dashboard-metrics").await
    }

    async fn get_all_agencies(&self) -> Result<Vec<Agency>> {
        self.get("/admin/agencies").await
    }

    async fn delete_agency(&self, id: &str) -> Result<bool> {
        self.delete(&format!("/admin/agencies/{}", segment(id)))
            .await
    }

    async fn get_all_properties(&self) -> Result<Vec<Property>> {
        self.get("/admin/properties").await
    }

    async fn delete_property(&self, id: &str) -> Result<bool> {
        self.delete(&format!("/admin/properties/{}", segment(id)))
            .await
    }

    // Filters travel in the request body, hence POST.
    async fn get_investments(&self, query: &InvestmentQuery) -> Result<Vec<UserInvestment>> {
        self.post("/admin/investments", query).await
    }
}
