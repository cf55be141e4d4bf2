use tracing::{info, instrument};

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    recipe::{
        entities::Recipe,
        parser::parse_generated_recipe,
        ports::{LLMClient, RecipeRepository, RecipeService},
        prompt::{SYSTEM_INSTRUCTION, build_recipe_prompt},
        value_objects::{DeleteRecipeInput, GenerateRecipeInput, GetRecipeInput, GetRecipesFilter},
    },
};

const DEFAULT_PAGE_SIZE: u32 = 20;
const MAX_PAGE_SIZE: u32 = 100;

impl<R, LLM, HC, TV> RecipeService for Service<R, LLM, HC, TV>
where
    R: RecipeRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
    TV: TokenVerifier,
{
    #[instrument(
        skip(self, identity, input),
        fields(user_id = %identity.id(), ingredient_count = input.ingredients.len())
    )]
    async fn generate_recipe(
        &self,
        identity: Identity,
        input: GenerateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        // 1. Reject bad input before anything leaves the process
        input.validate(&self.limits)?;

        // 2. Build prompt
        let prompt = build_recipe_prompt(&input.ingredients, input.preferences());

        // 3. Call LLM
        let raw_response = self
            .llm_client
            .generate_with_text(SYSTEM_INSTRUCTION.to_string(), prompt)
            .await?;

        // 4. Parse and validate response
        let generated = parse_generated_recipe(&raw_response)?;

        // 5. Persist
        let recipe = Recipe::from_generated(identity.id(), generated);
        let recipe = self.recipe_repository.create_recipe(recipe).await?;

        info!(recipe_id = %recipe.id, "Recipe generated");

        Ok(recipe)
    }

    async fn get_recipes(
        &self,
        identity: Identity,
        filter: GetRecipesFilter,
    ) -> Result<Vec<Recipe>, CoreError> {
        let filter = GetRecipesFilter {
            limit: Some(
                filter
                    .limit
                    .unwrap_or(DEFAULT_PAGE_SIZE)
                    .clamp(1, MAX_PAGE_SIZE),
            ),
            ..filter
        };

        self.recipe_repository
            .get_by_user(identity.id(), filter)
            .await
    }

    async fn get_recipe(
        &self,
        identity: Identity,
        input: GetRecipeInput,
    ) -> Result<Recipe, CoreError> {
        self.recipe_repository
            .get_by_id(input.recipe_id, identity.id())
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn delete_recipe(
        &self,
        identity: Identity,
        input: DeleteRecipeInput,
    ) -> Result<(), CoreError> {
        let deleted = self
            .recipe_repository
            .delete_recipe(input.recipe_id, identity.id())
            .await?;

        if !deleted {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        authentication::ports::MockTokenVerifier,
        common::{GenerationLimits, entities::app_errors::ErrorCategory},
        health::ports::MockHealthCheckRepository,
        recipe::{
            entities::Difficulty,
            ports::{MockLLMClient, MockRecipeRepository},
        },
    };

    type TestService =
        Service<MockRecipeRepository, MockLLMClient, MockHealthCheckRepository, MockTokenVerifier>;

    const VALID_RESPONSE: &str = r#"{"title":"X","ingredients":["a"],"instructions":["b"],"cookTime":"5 mins","servings":1,"difficulty":"Easy"}"#;

    fn identity() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: None,
            role: None,
        }
    }

    fn service(repository: MockRecipeRepository, llm: MockLLMClient) -> TestService {
        Service::new(
            repository,
            llm,
            MockHealthCheckRepository::new(),
            MockTokenVerifier::new(),
            GenerationLimits::default(),
        )
    }

    fn request(ingredients: &[&str]) -> GenerateRecipeInput {
        GenerateRecipeInput {
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            preferences: None,
        }
    }

    fn llm_answering(response: &'static str) -> MockLLMClient {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .times(1)
            .returning(move |_, _| Box::pin(async move { Ok(response.to_string()) }));
        llm
    }

    fn repository_echoing_insert() -> MockRecipeRepository {
        let mut repository = MockRecipeRepository::new();
        repository
            .expect_create_recipe()
            .times(1)
            .returning(|recipe| Box::pin(async move { Ok(recipe) }));
        repository
    }

    #[tokio::test]
    async fn test_generate_recipe_persists_validated_recipe() {
        let identity = identity();
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .withf(|system, prompt| {
                system == SYSTEM_INSTRUCTION && prompt.contains("Chicken, Rice")
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(VALID_RESPONSE.to_string()) }));

        let recipe = service(repository_echoing_insert(), llm)
            .generate_recipe(identity.clone(), request(&["Chicken", "Rice"]))
            .await
            .unwrap();

        assert_eq!(recipe.title, "X");
        assert_eq!(recipe.user_id, identity.id());
        assert!(recipe.is_ai_generated);
        assert!(!recipe.ingredients.is_empty());
        assert!(!recipe.instructions.is_empty());
        assert_eq!(recipe.difficulty, Difficulty::Easy);
    }

    #[tokio::test]
    async fn test_empty_ingredients_never_reach_the_gateway() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().never();
        let mut repository = MockRecipeRepository::new();
        repository.expect_create_recipe().never();

        let err = service(repository, llm)
            .generate_recipe(identity(), request(&[]))
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Validation("No ingredients provided".to_string()));
    }

    #[tokio::test]
    async fn test_incomplete_model_output_is_not_persisted() {
        let mut repository = MockRecipeRepository::new();
        repository.expect_create_recipe().never();

        let err = service(
            repository,
            llm_answering(r#"{"ingredients":["a"],"instructions":["b"],"servings":1,"difficulty":"Easy"}"#),
        )
        .generate_recipe(identity(), request(&["Eggs"]))
        .await
        .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(matches!(err, CoreError::InvalidGeneratedRecipe { .. }));
    }

    #[tokio::test]
    async fn test_gateway_failure_is_not_retried() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().times(1).returning(|_, _| {
            Box::pin(async {
                Err(CoreError::Gateway {
                    status: Some(503),
                    message: "upstream unavailable".to_string(),
                    details: "overloaded".to_string(),
                })
            })
        });
        let mut repository = MockRecipeRepository::new();
        repository.expect_create_recipe().never();

        let err = service(repository, llm)
            .generate_recipe(identity(), request(&["Eggs"]))
            .await
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Gateway);
    }

    #[tokio::test]
    async fn test_missing_api_key_surfaces_as_gateway_error() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .times(1)
            .returning(|_, _| Box::pin(async { Err(CoreError::MissingApiKey) }));

        let err = service(MockRecipeRepository::new(), llm)
            .generate_recipe(identity(), request(&["Eggs"]))
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::MissingApiKey);
        assert_eq!(err.category(), ErrorCategory::Gateway);
    }

    #[tokio::test]
    async fn test_persistence_failure_is_reported() {
        let mut repository = MockRecipeRepository::new();
        repository.expect_create_recipe().times(1).returning(|_| {
            Box::pin(async { Err(CoreError::Persistence("connection reset".to_string())) })
        });

        let err = service(repository, llm_answering(VALID_RESPONSE))
            .generate_recipe(identity(), request(&["Eggs"]))
            .await
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Persistence);
    }

    #[tokio::test]
    async fn test_get_recipes_clamps_page_size() {
        let identity = identity();
        let user_id = identity.id();
        let mut repository = MockRecipeRepository::new();
        repository
            .expect_get_by_user()
            .withf(move |id, filter| *id == user_id && filter.limit == Some(100))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(vec![]) }));

        let recipes = service(repository, MockLLMClient::new())
            .get_recipes(
                identity,
                GetRecipesFilter {
                    limit: Some(5000),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(recipes.is_empty());
    }

    #[tokio::test]
    async fn test_get_recipe_of_another_user_is_not_found() {
        let mut repository = MockRecipeRepository::new();
        repository
            .expect_get_by_id()
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let err = service(repository, MockLLMClient::new())
            .get_recipe(
                identity(),
                GetRecipeInput {
                    recipe_id: Uuid::new_v4(),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn test_delete_missing_recipe_is_not_found() {
        let mut repository = MockRecipeRepository::new();
        repository
            .expect_delete_recipe()
            .returning(|_, _| Box::pin(async { Ok(false) }));

        let err = service(repository, MockLLMClient::new())
            .delete_recipe(
                identity(),
                DeleteRecipeInput {
                    recipe_id: Uuid::new_v4(),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound);
    }
}
