use crate::domain::{
    authentication::{
        ports::{AuthService, TokenVerifier},
        value_objects::{AuthorizeRequestInput, AuthorizeRequestOutput, Identity},
    },
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    recipe::ports::{LLMClient, RecipeRepository},
};

impl<R, LLM, HC, TV> AuthService for Service<R, LLM, HC, TV>
where
    R: RecipeRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
    TV: TokenVerifier,
{
    async fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> Result<AuthorizeRequestOutput, CoreError> {
        let claims = self.token_verifier.verify(&input.token)?;

        Ok(AuthorizeRequestOutput {
            identity: Identity::from(claims),
        })
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        authentication::{entities::JwtClaim, ports::MockTokenVerifier},
        common::GenerationLimits,
        health::ports::MockHealthCheckRepository,
        recipe::ports::{MockLLMClient, MockRecipeRepository},
    };

    fn service_with(
        verifier: MockTokenVerifier,
    ) -> Service<MockRecipeRepository, MockLLMClient, MockHealthCheckRepository, MockTokenVerifier>
    {
        Service::new(
            MockRecipeRepository::new(),
            MockLLMClient::new(),
            MockHealthCheckRepository::new(),
            verifier,
            GenerationLimits::default(),
        )
    }

    #[tokio::test]
    async fn test_authorize_request_maps_claims_to_identity() {
        let user_id = Uuid::new_v4();
        let mut verifier = MockTokenVerifier::new();
        verifier.expect_verify().returning(move |_| {
            Ok(JwtClaim {
                sub: user_id,
                exp: 0,
                aud: Some("authenticated".to_string()),
                email: Some("cook@example.com".to_string()),
                role: None,
            })
        });

        let output = service_with(verifier)
            .authorize_request(AuthorizeRequestInput {
                token: "token".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.identity.id(), user_id);
        assert_eq!(output.identity.email.as_deref(), Some("cook@example.com"));
    }

    #[tokio::test]
    async fn test_authorize_request_rejects_bad_token() {
        let mut verifier = MockTokenVerifier::new();
        verifier
            .expect_verify()
            .returning(|_| Err(CoreError::InvalidToken));

        let result = service_with(verifier)
            .authorize_request(AuthorizeRequestInput {
                token: "garbage".to_string(),
            })
            .await;

        assert_eq!(result.unwrap_err(), CoreError::InvalidToken);
    }
}
