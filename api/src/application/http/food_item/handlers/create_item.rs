use axum::extract::State;
use freshkeep_core::domain::food_item::{CreateFoodItemInput, FoodItemService};

use crate::application::http::{
    food_item::{responses::FoodItemResponse, validators::CreateFoodItemValidator},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "food-item",
    summary = "Add an item",
    description = "Stores a new food item. The expiry date must use the YYYY-MM-DD format.",
    request_body = CreateFoodItemValidator,
    responses(
        (status = 201, body = FoodItemResponse),
        (status = 400, body = ApiErrorResponse, description = "Missing or malformed fields"),
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateFoodItemValidator>,
) -> Result<Response<FoodItemResponse>, ApiError> {
    let item = state
        .service
        .create_food_item(CreateFoodItemInput {
            name: payload.name,
            expiry: payload.expiry,
            category: payload.category,
            quantity: payload.quantity,
            unit: payload.unit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(item.into()))
}
