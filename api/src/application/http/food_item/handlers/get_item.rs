use axum::extract::{Path, State};
use freshkeep_core::domain::food_item::{FoodItemService, GetFoodItemInput};

use super::parse_item_id;
use crate::application::http::{
    food_item::responses::FoodItemResponse,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{item_id}",
    tag = "food-item",
    summary = "Get an item",
    params(
        ("item_id" = String, Path, description = "Item ID (UUID)"),
    ),
    responses(
        (status = 200, body = FoodItemResponse),
        (status = 400, body = ApiErrorResponse, description = "Malformed item ID"),
        (status = 404, body = ApiErrorResponse),
    )
)]
pub async fn get_item(
    Path(item_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<FoodItemResponse>, ApiError> {
    let item_id = parse_item_id(&item_id)?;

    let item = state
        .service
        .get_food_item(GetFoodItemInput { item_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(item.into()))
}
