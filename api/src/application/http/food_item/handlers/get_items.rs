use axum::extract::State;
use freshkeep_core::domain::food_item::FoodItemService;

use crate::application::http::{
    food_item::responses::FoodItemResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "food-item",
    summary = "List items",
    description = "Returns every stored item, soonest expiry first.",
    responses(
        (status = 200, body = Vec<FoodItemResponse>)
    )
)]
pub async fn get_items(
    State(state): State<AppState>,
) -> Result<Response<Vec<FoodItemResponse>>, ApiError> {
    let items = state
        .service
        .get_food_items()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(
        items.into_iter().map(FoodItemResponse::from).collect(),
    ))
}
