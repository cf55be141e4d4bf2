use crate::domain::{
    authentication::ports::TokenVerifier,
    common::GenerationLimits,
    health::ports::HealthCheckRepository,
    recipe::ports::{LLMClient, RecipeRepository},
};

/// Holds every adapter the domain services need. Each `*Service` trait is implemented on it.
#[derive(Clone)]
pub struct Service<R, LLM, HC, TV>
where
    R: RecipeRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
    TV: TokenVerifier,
{
    pub(crate) recipe_repository: R,
    pub(crate) llm_client: LLM,
    pub(crate) health_check_repository: HC,
    pub(crate) token_verifier: TV,
    pub(crate) limits: GenerationLimits,
}

impl<R, LLM, HC, TV> Service<R, LLM, HC, TV>
where
    R: RecipeRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
    TV: TokenVerifier,
{
    pub fn new(
        recipe_repository: R,
        llm_client: LLM,
        health_check_repository: HC,
        token_verifier: TV,
        limits: GenerationLimits,
    ) -> Self {
        Self {
            recipe_repository,
            llm_client,
            health_check_repository,
            token_verifier,
            limits,
        }
    }

    pub fn limits(&self) -> GenerationLimits {
        self.limits
    }
}
