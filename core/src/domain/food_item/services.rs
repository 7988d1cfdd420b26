use chrono::Utc;
use tracing::{debug, info};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_item::{
        entities::{FoodItem, FoodItemConfig},
        ports::{FoodItemRepository, FoodItemService},
        value_objects::{
            CreateFoodItemInput, DeleteFoodItemInput, ExpiryWindow, FoodItemChanges,
            GetFoodItemInput, GetNearingExpiryInput, MISSING_REQUIRED_FIELDS, UpdateFoodItemInput,
            parse_expiry_date,
        },
    },
    health::ports::HealthCheckRepository,
    recipe::ports::LLMClient,
};

impl<F, LLM, HC> FoodItemService for Service<F, LLM, HC>
where
    F: FoodItemRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn create_food_item(&self, input: CreateFoodItemInput) -> Result<FoodItem, CoreError> {
        let (name, expiry) = match (input.name, input.expiry) {
            (Some(name), Some(expiry)) if !name.is_empty() && !expiry.is_empty() => {
                (name, expiry)
            }
            _ => {
                return Err(CoreError::ValidationError(
                    MISSING_REQUIRED_FIELDS.to_string(),
                ));
            }
        };

        let expiry_date = parse_expiry_date(&expiry)?;

        let item = FoodItem::new(FoodItemConfig {
            name,
            expiry_date,
            category: input.category,
            quantity: input.quantity,
            unit: input.unit,
        });

        let created = self.food_item_repository.create_item(item).await?;
        info!(item_id = %created.id, "food item created");

        Ok(created)
    }

    async fn get_food_items(&self) -> Result<Vec<FoodItem>, CoreError> {
        self.food_item_repository.get_all_by_expiry().await
    }

    async fn get_food_item(&self, input: GetFoodItemInput) -> Result<FoodItem, CoreError> {
        self.food_item_repository
            .get_by_id(input.item_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn update_food_item(&self, input: UpdateFoodItemInput) -> Result<FoodItem, CoreError> {
        let item_id = input.item_id;
        let changes = FoodItemChanges::try_from(input)?;

        let mut item = self
            .food_item_repository
            .get_by_id(item_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        item.apply(changes);

        let updated = self
            .food_item_repository
            .update_item(item)
            .await?
            .ok_or(CoreError::NotFound)?;
        info!(item_id = %updated.id, "food item updated");

        Ok(updated)
    }

    async fn delete_food_item(&self, input: DeleteFoodItemInput) -> Result<(), CoreError> {
        let deleted = self.food_item_repository.delete_item(input.item_id).await?;

        if !deleted {
            return Err(CoreError::NotFound);
        }

        info!(item_id = %input.item_id, "food item deleted");
        Ok(())
    }

    async fn get_nearing_expiry_items(
        &self,
        input: GetNearingExpiryInput,
    ) -> Result<Vec<FoodItem>, CoreError> {
        let today = Utc::now().date_naive();
        let window = ExpiryWindow::starting_at(today, input.days);

        if window.is_empty() {
            debug!(days = input.days, "empty expiry window");
            return Ok(Vec::new());
        }

        self.food_item_repository.get_expiring_within(window).await
    }
}
