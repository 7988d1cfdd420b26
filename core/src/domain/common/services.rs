use crate::domain::{
    food_item::ports::FoodItemRepository, health::ports::HealthCheckRepository,
    recipe::ports::LLMClient,
};

/// Every service port of the crate is implemented on this struct, one
/// `impl` block per domain module.
#[derive(Clone)]
pub struct Service<F, LLM, HC>
where
    F: FoodItemRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    pub food_item_repository: F,
    pub llm_client: LLM,
    pub health_check_repository: HC,
}

impl<F, LLM, HC> Service<F, LLM, HC>
where
    F: FoodItemRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    pub fn new(food_item_repository: F, llm_client: LLM, health_check_repository: HC) -> Self {
        Self {
            food_item_repository,
            llm_client,
            health_check_repository,
        }
    }
}
