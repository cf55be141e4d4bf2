use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use crate::domain::{
    authentication::{entities::JwtClaim, ports::TokenVerifier},
    common::entities::app_errors::CoreError,
};

/// Verifies HS256 access tokens signed with the auth backend's shared secret.
#[derive(Clone)]
pub struct HsJwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl HsJwtVerifier {
    pub fn new(secret: &str, audience: Option<&str>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        match audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl TokenVerifier for HsJwtVerifier {
    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        decode::<JwtClaim>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Rejected access token: {}", e);
                CoreError::InvalidToken
            })
    }
}
