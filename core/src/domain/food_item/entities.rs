use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, food_item::value_objects::FoodItemChanges};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    pub expiry_date: NaiveDate,
    pub category: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FoodItemConfig {
    pub name: String,
    pub expiry_date: NaiveDate,
    pub category: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

impl FoodItem {
    pub fn new(config: FoodItemConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: config.name,
            expiry_date: config.expiry_date,
            category: config.category,
            quantity: config.quantity,
            unit: config.unit,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the supplied changes in place, leaving untouched fields as they are.
    pub fn apply(&mut self, changes: FoodItemChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(expiry_date) = changes.expiry_date {
            self.expiry_date = expiry_date;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(quantity) = changes.quantity {
            self.quantity = quantity;
        }
        if let Some(unit) = changes.unit {
            self.unit = unit;
        }
        let (now, _) = generate_timestamp();
        self.updated_at = now;
    }
}
