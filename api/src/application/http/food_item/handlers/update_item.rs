use axum::extract::{Path, State};
use freshkeep_core::domain::food_item::{FoodItemService, UpdateFoodItemInput};

use super::parse_item_id;
use crate::application::http::{
    food_item::{responses::FoodItemResponse, validators::UpdateFoodItemValidator},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/{item_id}",
    tag = "food-item",
    summary = "Update an item",
    description = "Overwrites only the supplied fields. An explicit null clears an optional field.",
    params(
        ("item_id" = String, Path, description = "Item ID (UUID)"),
    ),
    request_body = UpdateFoodItemValidator,
    responses(
        (status = 200, body = FoodItemResponse),
        (status = 400, body = ApiErrorResponse, description = "Malformed item ID or fields"),
        (status = 404, body = ApiErrorResponse),
    )
)]
pub async fn update_item(
    Path(item_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateFoodItemValidator>,
) -> Result<Response<FoodItemResponse>, ApiError> {
    let item_id = parse_item_id(&item_id)?;

    let item = state
        .service
        .update_food_item(UpdateFoodItemInput {
            item_id,
            name: payload.name,
            expiry: payload.expiry,
            category: payload.category,
            quantity: payload.quantity,
            unit: payload.unit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(item.into()))
}
