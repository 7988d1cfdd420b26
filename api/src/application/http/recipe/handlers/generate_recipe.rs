use axum::extract::State;
use freshkeep_core::domain::{
    common::entities::app_errors::CoreError,
    recipe::{GenerateRecipeInput, RecipeService, RecipeSuggestion},
};

use crate::application::http::{
    recipe::validators::GenerateRecipeValidator,
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
    path = "/generate-recipe",
    tag = "recipe",
    summary = "Generate a recipe",
    description = "Asks the generation service for a recipe that only uses the given ingredients and common pantry staples.",
    request_body = GenerateRecipeValidator,
    responses(
        (status = 200, body = RecipeSuggestion),
        (status = 400, body = ApiErrorResponse, description = "inventory_items is missing"),
        (status = 500, body = RecipeSuggestion, description = "Generation failed; the body explains the error"),
    )
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<RecipeSuggestion>, ApiError> {
    let recipe = state
        .service
        .generate_recipe(GenerateRecipeInput {
            inventory_items: payload.into_items(),
        })
        .await
        .map_err(|e| {
            ApiError::RecipeGenerationFailed(RecipeSuggestion::generation_failed(failure_reason(e)))
        })?;

    Ok(Response::OK(recipe))
}

/// Reason shown to the client, without the error kind prefix.
fn failure_reason(error: CoreError) -> String {
    match error {
        CoreError::ExternalServiceError(message) => message,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_failures_keep_only_their_message() {
        let reason = failure_reason(CoreError::ExternalServiceError(
            "LLM API returned error: 500 - quota exhausted".to_string(),
        ));

        assert_eq!(reason, "LLM API returned error: 500 - quota exhausted");
    }

    #[test]
    fn other_failures_use_their_display() {
        assert_eq!(
            failure_reason(CoreError::InternalServerError),
            "Internal server error"
        );
    }
}
