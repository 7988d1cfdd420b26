use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_item::ports::FoodItemRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    recipe::ports::LLMClient,
};

impl<F, LLM, HC> HealthCheckService for Service<F, LLM, HC>
where
    F: FoodItemRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}
