use crate::{
    domain::common::{FreshKeepConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        food_item::PostgresFoodItemRepository,
        health::PostgresHealthCheckRepository,
        llm::GeminiLLMClient,
    },
};

pub type FreshKeepService =
    Service<PostgresFoodItemRepository, GeminiLLMClient, PostgresHealthCheckRepository>;

/// Connects the store, makes sure the schema exists and wires every adapter
/// into a [`FreshKeepService`].
pub async fn create_service(config: FreshKeepConfig) -> Result<FreshKeepService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url,
    })
    .await?;
    postgres.ensure_schema().await?;

    let llm_client = GeminiLLMClient::new(
        config.llm.gemini_api_key,
        config.llm.gemini_model,
        config.llm.gemini_base_url,
    );

    Ok(Service::new(
        PostgresFoodItemRepository::new(postgres.get_db()),
        llm_client,
        PostgresHealthCheckRepository::new(postgres.get_db()),
    ))
}
