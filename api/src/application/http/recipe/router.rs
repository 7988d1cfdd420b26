use super::handlers::generate_recipe::{__path_generate_recipe, generate_recipe};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipe))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/generate-recipe", state.args.server.root_path),
        post(generate_recipe),
    )
}
