//! Property listing models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::{compute_investment_progress, PropertyTotals};

/// A listed property open to fractional investment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    /// Target valuation the property is being funded towards
    pub price: Decimal,
    pub cover_photo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_video: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panoramas: Option<Vec<String>>,
    pub title: String,
    pub area: Decimal,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub furnishing_status: bool,
    pub availability: bool,
    /// Sum of every investor's amount in this property
    pub total_invested: Decimal,
    pub agency_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_for_investment: Option<Vec<String>>,
    pub created_at: String,
    pub updated_at: String,
}

impl Property {
    pub fn totals(&self) -> PropertyTotals {
        PropertyTotals {
            property_id: self.id.clone(),
            property_name: self.name.clone(),
            total_property_investment: self.total_invested,
            price: self.price,
        }
    }

    /// Funded share of the price in percent, clamped to `[0, 100]` for progress bars.
    pub fn investment_progress(&self) -> Decimal {
        compute_investment_progress(self.total_invested, self.price)
    }

    pub fn is_open_for_investment(&self) -> bool {
        self.availability
    }
}

/// Payload for listing a new property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub name: String,
    pub description: String,
    pub location: String,
    pub price: Decimal,
    pub cover_photo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_video: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panoramas: Option<Vec<String>>,
    pub title: String,
    pub area: Decimal,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub furnishing_status: bool,
    pub availability: bool,
    pub agency_id: String,
}

/// Partial update: only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_video: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panoramas: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub furnishing_status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency_id: Option<String>,
}
