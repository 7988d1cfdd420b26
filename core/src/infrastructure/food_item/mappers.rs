use sea_orm::ActiveValue::Set;

use crate::{
    domain::food_item::entities::FoodItem,
    entity::food_items::{ActiveModel, Model},
};

impl From<&Model> for FoodItem {
    fn from(model: &Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            expiry_date: model.expiry_date,
            category: model.category.clone(),
            quantity: model.quantity,
            unit: model.unit.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<Model> for FoodItem {
    fn from(model: Model) -> Self {
        Self::from(&model)
    }
}

impl From<FoodItem> for ActiveModel {
    fn from(item: FoodItem) -> Self {
        Self {
            id: Set(item.id),
            name: Set(item.name),
            expiry_date: Set(item.expiry_date),
            category: Set(item.category),
            quantity: Set(item.quantity),
            unit: Set(item.unit),
            created_at: Set(item.created_at.fixed_offset()),
            updated_at: Set(item.updated_at.fixed_offset()),
        }
    }
}
