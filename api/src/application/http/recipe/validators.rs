use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipeValidator {
    /// Selected ingredient names, in selection order.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "No ingredients provided"))]
    pub ingredients: Vec<String>,

    /// Free-text wishes such as "vegetarian" or "under 30 minutes".
    #[serde(default)]
    pub preferences: Option<String>,
}
