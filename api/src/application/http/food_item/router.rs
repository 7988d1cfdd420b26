use super::handlers::{
    create_item::{__path_create_item, create_item},
    delete_item::{__path_delete_item, delete_item},
    get_item::{__path_get_item, get_item},
    get_items::{__path_get_items, get_items},
    get_nearing_expiry::{__path_get_nearing_expiry, get_nearing_expiry},
    update_item::{__path_update_item, update_item},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    create_item,
    get_items,
    get_nearing_expiry,
    get_item,
    update_item,
    delete_item
))]
pub struct FoodItemApiDoc;

pub fn food_item_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/items", state.args.server.root_path),
            post(create_item).get(get_items),
        )
        .route(
            &format!("{}/api/items/nearing-expiry", state.args.server.root_path),
            get(get_nearing_expiry),
        )
        .route(
            &format!("{}/api/items/{{item_id}}", state.args.server.root_path),
            get(get_item).put(update_item).delete(delete_item),
        )
}
