use crate::application::http::{
    food_item::router::FoodItemApiDoc, health::router::HealthApiDoc, recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FreshKeep API",
        description = "Household food inventory with expiry tracking and recipe suggestions."
    ),
    nest(
        (path = "/api/items", api = FoodItemApiDoc),
        (path = "/api", api = RecipeApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
