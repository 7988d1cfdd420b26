use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use freshkeep_core::domain::food_item::{DeleteFoodItemInput, FoodItemService};

use super::parse_item_id;
use crate::application::http::server::{
    api_entities::api_error::{ApiError, ApiErrorResponse},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{item_id}",
    tag = "food-item",
    summary = "Delete an item",
    params(
        ("item_id" = String, Path, description = "Item ID (UUID)"),
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, body = ApiErrorResponse, description = "Malformed item ID"),
        (status = 404, body = ApiErrorResponse),
    )
)]
pub async fn delete_item(
    Path(item_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let item_id = parse_item_id(&item_id)?;

    state
        .service
        .delete_food_item(DeleteFoodItemInput { item_id })
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
