//! Properties module - listing records and their derived display fields.

mod properties_model;

pub use properties_model::{NewProperty, Property, PropertyUpdate};

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const PROPERTY_JSON: &str = r#"{
        "id": "p-1",
        "name": "Kilimani Heights",
        "description": "Two-bedroom apartment",
        "location": "Nairobi",
        "price": 1000000,
        "coverPhoto": "https://cdn.example.com/cover.jpg",
        "title": "Modern living",
        "area": 95.5,
        "bedrooms": 2,
        "bathrooms": 1,
        "photos": ["a.jpg", "b.jpg"],
        "amenities": ["pool"],
        "furnishingStatus": true,
        "availability": true,
        "totalInvested": 250000,
        "agencyId": "ag-1",
        "createdAt": "2025-10-21T10:00:00Z",
        "updatedAt": "2025-10-22T10:00:00Z"
    }"#;

    #[test]
    fn test_property_deserialization_with_optional_media() {
        let property: Property = serde_json::from_str(PROPERTY_JSON).unwrap();
        assert_eq!(property.cover_video, None);
        assert_eq!(property.panoramas, None);
        assert_eq!(property.photos.len(), 2);
        assert_eq!(property.total_invested, dec!(250000));
    }

    #[test]
    fn test_property_totals_and_progress() {
        let property: Property = serde_json::from_str(PROPERTY_JSON).unwrap();
        let totals = property.totals();
        assert_eq!(totals.property_id, "p-1");
        assert_eq!(totals.property_name, "Kilimani Heights");
        assert_eq!(totals.total_property_investment, dec!(250000));
        assert_eq!(totals.price, dec!(1000000));
        assert_eq!(property.investment_progress(), dec!(25));
        assert!(property.is_open_for_investment());
    }

    #[test]
    fn test_property_update_serializes_only_set_fields() {
        let update = PropertyUpdate {
            price: Some(dec!(1200000)),
            availability: Some(false),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["availability"], serde_json::json!(false));
        assert!(obj.contains_key("price"));
    }
}
