use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        food_item::{entities::FoodItem, ports::FoodItemRepository, value_objects::ExpiryWindow},
    },
    entity::food_items::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresFoodItemRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FoodItemRepository for PostgresFoodItemRepository {
    async fn create_item(&self, item: FoodItem) -> Result<FoodItem, CoreError> {
        let created = ActiveModel::from(item)
            .insert(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create food item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(FoodItem::from(created))
    }

    async fn get_by_id(&self, item_id: Uuid) -> Result<Option<FoodItem>, CoreError> {
        let item = Entity::find_by_id(item_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get food item by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(FoodItem::from);

        Ok(item)
    }

    async fn get_all_by_expiry(&self) -> Result<Vec<FoodItem>, CoreError> {
        let items = Entity::find()
            .order_by_asc(Column::ExpiryDate)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch food items: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(FoodItem::from)
            .collect::<Vec<FoodItem>>();

        Ok(items)
    }

    async fn update_item(&self, item: FoodItem) -> Result<Option<FoodItem>, CoreError> {
        let item_id = item.id;

        match ActiveModel::from(item).update(&self.db).await {
            Ok(updated) => Ok(Some(FoodItem::from(updated))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => {
                error!("Failed to update food item {}: {}", item_id, e);
                Err(CoreError::InternalServerError)
            }
        }
    }

    async fn delete_item(&self, item_id: Uuid) -> Result<bool, CoreError> {
        let result = Entity::delete_by_id(item_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete food item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected > 0)
    }

    async fn get_expiring_within(&self, window: ExpiryWindow) -> Result<Vec<FoodItem>, CoreError> {
        let items = Entity::find()
            .filter(Column::ExpiryDate.gte(window.from))
            .filter(Column::ExpiryDate.lte(window.to))
            .order_by_asc(Column::ExpiryDate)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch food items nearing expiry: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(FoodItem::from)
            .collect::<Vec<FoodItem>>();

        Ok(items)
    }
}
