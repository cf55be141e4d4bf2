use uuid::Uuid;

use crate::domain::authentication::entities::JwtClaim;

/// The authenticated caller. Every recipe is owned by exactly one `user_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl Identity {
    pub fn id(&self) -> Uuid {
        self.user_id
    }
}

impl From<JwtClaim> for Identity {
    fn from(claims: JwtClaim) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthorizeRequestInput {
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct AuthorizeRequestOutput {
    pub identity: Identity,
}
