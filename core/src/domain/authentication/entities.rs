use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by access tokens issued by the hosted auth backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JwtClaim {
    pub sub: Uuid,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
