use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::ApiError;

pub mod create_item;
pub mod delete_item;
pub mod get_item;
pub mod get_items;
pub mod get_nearing_expiry;
pub mod update_item;

pub const INVALID_ITEM_ID: &str = "Invalid item ID format";

/// Malformed ids answer 400; well-formed but unknown ones reach the service.
pub(crate) fn parse_item_id(item_id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(item_id).map_err(|_| ApiError::BadRequest(INVALID_ITEM_ID.to_string()))
}
