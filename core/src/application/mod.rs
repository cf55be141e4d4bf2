use tracing::warn;

use crate::{
    domain::common::{LarderConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        jwt::HsJwtVerifier,
        llm::openai_client::OpenAILLMClient,
        recipe::PostgresRecipeRepository,
    },
};

pub type LarderService = Service<
    PostgresRecipeRepository,
    OpenAILLMClient,
    PostgresHealthCheckRepository,
    HsJwtVerifier,
>;

pub async fn create_service(config: LarderConfig) -> Result<LarderService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url.clone(),
        max_connections: config.database.max_connections,
    })
    .await?;

    let llm_client = OpenAILLMClient::new(&config.llm);
    if !llm_client.has_api_key() {
        warn!("OPENAI_API_KEY is not set, recipe generation will fail until it is configured");
    }

    Ok(Service::new(
        PostgresRecipeRepository::new(postgres.get_db()),
        llm_client,
        PostgresHealthCheckRepository::new(postgres.get_db()),
        HsJwtVerifier::new(&config.auth.jwt_secret, config.auth.jwt_audience.as_deref()),
        config.limits,
    ))
}
