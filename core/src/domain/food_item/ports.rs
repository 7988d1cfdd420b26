use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_item::{
        entities::FoodItem,
        value_objects::{
            CreateFoodItemInput, DeleteFoodItemInput, ExpiryWindow, GetFoodItemInput,
            GetNearingExpiryInput, UpdateFoodItemInput,
        },
    },
};

/// Repository trait for the food item store
#[cfg_attr(test, mockall::automock)]
pub trait FoodItemRepository: Send + Sync {
    fn create_item(
        &self,
        item: FoodItem,
    ) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn get_by_id(
        &self,
        item_id: Uuid,
    ) -> impl Future<Output = Result<Option<FoodItem>, CoreError>> + Send;

    fn get_all_by_expiry(&self) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;

    /// Writes the item back. Resolves to `None` when no row carries its id.
    fn update_item(
        &self,
        item: FoodItem,
    ) -> impl Future<Output = Result<Option<FoodItem>, CoreError>> + Send;

    /// Resolves to `false` when nothing was deleted.
    fn delete_item(&self, item_id: Uuid) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn get_expiring_within(
        &self,
        window: ExpiryWindow,
    ) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;
}

/// Service trait for food item management
#[cfg_attr(test, mockall::automock)]
pub trait FoodItemService: Send + Sync {
    fn create_food_item(
        &self,
        input: CreateFoodItemInput,
    ) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn get_food_items(&self) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;

    fn get_food_item(
        &self,
        input: GetFoodItemInput,
    ) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn update_food_item(
        &self,
        input: UpdateFoodItemInput,
    ) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn delete_food_item(
        &self,
        input: DeleteFoodItemInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_nearing_expiry_items(
        &self,
        input: GetNearingExpiryInput,
    ) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;
}
