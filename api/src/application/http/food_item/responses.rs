use chrono::NaiveDate;
use freshkeep_core::domain::food_item::FoodItem;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Item as seen by HTTP clients.
///
/// `_id` mirrors `id` for clients written against the document store layout.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FoodItemResponse {
    pub id: Uuid,
    #[serde(rename = "_id")]
    pub legacy_id: Uuid,
    pub name: String,
    #[schema(example = "2025-01-31")]
    pub expiry: NaiveDate,
    pub category: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

impl From<FoodItem> for FoodItemResponse {
    fn from(item: FoodItem) -> Self {
        Self {
            id: item.id,
            legacy_id: item.id,
            name: item.name,
            expiry: item.expiry_date,
            category: item.category,
            quantity: item.quantity,
            unit: item.unit,
        }
    }
}
