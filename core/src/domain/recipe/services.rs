use tracing::{debug, error};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_item::ports::FoodItemRepository,
    health::ports::HealthCheckRepository,
    recipe::{
        entities::RecipeSuggestion,
        parser::parse_recipe_reply,
        ports::{LLMClient, RecipeService},
        prompt::build_recipe_prompt,
        value_objects::GenerateRecipeInput,
    },
};

impl<F, LLM, HC> RecipeService for Service<F, LLM, HC>
where
    F: FoodItemRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn generate_recipe(
        &self,
        input: GenerateRecipeInput,
    ) -> Result<RecipeSuggestion, CoreError> {
        if input.inventory_items.is_empty() {
            return Ok(RecipeSuggestion::no_items_provided());
        }

        let prompt = build_recipe_prompt(&input.inventory_items);
        debug!(
            items = input.inventory_items.len(),
            "requesting recipe from generation service"
        );

        let reply = self.llm_client.generate_text(prompt).await.map_err(|e| {
            error!("Recipe generation failed: {}", e);
            match e {
                CoreError::ExternalServiceError(_) => e,
                other => CoreError::ExternalServiceError(other.to_string()),
            }
        })?;

        Ok(parse_recipe_reply(&reply))
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::function;

    use super::*;
    use crate::domain::{
        food_item::ports::MockFoodItemRepository, health::ports::MockHealthCheckRepository,
        recipe::ports::MockLLMClient,
    };

    fn service(
        llm_client: MockLLMClient,
    ) -> Service<MockFoodItemRepository, MockLLMClient, MockHealthCheckRepository> {
        Service::new(
            MockFoodItemRepository::new(),
            llm_client,
            MockHealthCheckRepository::new(),
        )
    }

    fn input(names: &[&str]) -> GenerateRecipeInput {
        GenerateRecipeInput {
            inventory_items: names.iter().map(|name| name.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn empty_inventory_skips_the_generation_service() {
        let mut llm_client = MockLLMClient::new();
        llm_client.expect_generate_text().never();

        let recipe = service(llm_client)
            .generate_recipe(input(&[]))
            .await
            .unwrap();

        assert_eq!(recipe, RecipeSuggestion::no_items_provided());
        assert_eq!(recipe.name, "No Items Provided");
    }

    #[tokio::test]
    async fn sends_prompt_and_parses_reply() {
        let mut llm_client = MockLLMClient::new();
        llm_client
            .expect_generate_text()
            .with(function(|prompt: &String| {
                prompt.contains("carrots, lentils") && prompt.contains("Recipe Name:")
            }))
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    Ok("Recipe Name: Lentil Stew\n\
                        Ingredients: carrots, lentils, water (pantry staple)\n\
                        Instructions:\n\
                        1. Chop the carrots.\n\
                        2. Simmer everything for 30 minutes."
                        .to_string())
                })
            });

        let recipe = service(llm_client)
            .generate_recipe(input(&["carrots", "lentils"]))
            .await
            .unwrap();

        assert_eq!(recipe.name, "Lentil Stew");
        assert_eq!(recipe.ingredients, "carrots, lentils, water (pantry staple)");
        assert_eq!(
            recipe.instructions,
            "1. Chop the carrots.\n2. Simmer everything for 30 minutes."
        );
    }

    #[tokio::test]
    async fn client_failures_surface_as_external_service_errors() {
        let mut llm_client = MockLLMClient::new();
        llm_client.expect_generate_text().times(1).returning(|_| {
            Box::pin(async {
                Err(CoreError::ExternalServiceError(
                    "LLM API returned error: 403 Forbidden".to_string(),
                ))
            })
        });

        let err = service(llm_client)
            .generate_recipe(input(&["bread"]))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::ExternalServiceError("LLM API returned error: 403 Forbidden".to_string())
        );
    }

    #[tokio::test]
    async fn other_client_errors_are_wrapped() {
        let mut llm_client = MockLLMClient::new();
        llm_client
            .expect_generate_text()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));

        let err = service(llm_client)
            .generate_recipe(input(&["bread"]))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }
}
