use axum::extract::{Query, State};
use freshkeep_core::domain::food_item::{
    DEFAULT_NEARING_EXPIRY_DAYS, FoodItemService, GetNearingExpiryInput,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::http::{
    food_item::responses::FoodItemResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct NearingExpiryParams {
    /// Window length in days. Anything that is not an integer falls back to 7.
    #[param(value_type = Option<i64>)]
    pub days: Option<String>,
}

impl NearingExpiryParams {
    pub fn days(&self) -> i64 {
        self.days
            .as_deref()
            .and_then(|days| days.trim().parse().ok())
            .unwrap_or(DEFAULT_NEARING_EXPIRY_DAYS)
    }
}

#[utoipa::path(
    get,
    path = "/nearing-expiry",
    tag = "food-item",
    summary = "List items nearing expiry",
    description = "Returns the items expiring between today and today plus `days`, both inclusive.",
    params(NearingExpiryParams),
    responses(
        (status = 200, body = Vec<FoodItemResponse>)
    )
)]
pub async fn get_nearing_expiry(
    State(state): State<AppState>,
    Query(params): Query<NearingExpiryParams>,
) -> Result<Response<Vec<FoodItemResponse>>, ApiError> {
    let items = state
        .service
        .get_nearing_expiry_items(GetNearingExpiryInput {
            days: params.days(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(
        items.into_iter().map(FoodItemResponse::from).collect(),
    ))
}
