use async_trait::async_trait;

use urbanroof_core::errors::Result;
use urbanroof_core::properties::{NewProperty, Property, PropertyUpdate};

use super::PropertyApi;
use crate::client::{segment, UrbanRoofClient};

#[async_trait]
impl PropertyApi for UrbanRoofClient {
    async fn get_all_properties(&self) -> Result<Vec<Property>> {
        self.get("/properties").await
    }

    async fn get_property_by_id(&self, id: &str) -> Result<Property> {
        self.get(&format!("/properties/{}", segment(id))).await
    }

    async fn add_property(&self, property: &NewProperty) -> Result<Property> {
        self.post("/properties", property).await
    }

    async fn update_property(&self, id: &str, update: &PropertyUpdate) -> Result<Property> {
        self.put(&format!("/properties/{}", segment(id)), update).await
    }

    async fn delete_property(&self, id: &str) -> Result<()> {
        self.delete_unit(&format!("/properties/{}", segment(id))).await
    }
}
