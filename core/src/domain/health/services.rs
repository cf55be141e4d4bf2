use crate::domain::{
    authentication::ports::TokenVerifier,
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    recipe::ports::{LLMClient, RecipeRepository},
};

impl<R, LLM, HC, TV> HealthCheckService for Service<R, LLM, HC, TV>
where
    R: RecipeRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
    TV: TokenVerifier,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }
}
