use serde::Deserialize;
use serde_json::Value;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{Difficulty, GeneratedRecipe},
};

/// Shape of the model's answer before validation; every field may be missing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGeneratedRecipe {
    title: Option<String>,
    description: Option<String>,
    ingredients: Option<Vec<String>>,
    instructions: Option<Vec<String>>,
    cook_time: Option<String>,
    servings: Option<Value>,
    difficulty: Option<String>,
}

/// Parses the assistant's text into a [`GeneratedRecipe`].
///
/// Fails with [`CoreError::InvalidGeneratedRecipe`], carrying the untouched text, when the
/// payload is not a JSON object or any required field is missing or malformed.
pub fn parse_generated_recipe(raw: &str) -> Result<GeneratedRecipe, CoreError> {
    let body = strip_code_fence(raw);

    let parsed: RawGeneratedRecipe = serde_json::from_str(body).map_err(|e| {
        error!(raw_response = %raw, "Failed to parse generated recipe: {}", e);
        CoreError::invalid_generated_recipe(format!("invalid JSON: {e}"), raw)
    })?;

    let invalid = |reason: &str| {
        error!(raw_response = %raw, "Generated recipe rejected: {}", reason);
        CoreError::invalid_generated_recipe(reason, raw)
    };

    let title = parsed
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| invalid("missing title"))?;

    let ingredients =
        non_blank_lines(parsed.ingredients).ok_or_else(|| invalid("missing ingredients"))?;
    let instructions =
        non_blank_lines(parsed.instructions).ok_or_else(|| invalid("missing instructions"))?;

    let servings = parsed
        .servings
        .as_ref()
        .and_then(parse_servings)
        .ok_or_else(|| invalid("servings must be a positive integer"))?;

    let difficulty = parsed
        .difficulty
        .as_deref()
        .and_then(|d| d.parse::<Difficulty>().ok())
        .ok_or_else(|| invalid("difficulty must be one of Easy, Medium, Hard"))?;

    Ok(GeneratedRecipe {
        title,
        description: parsed.description.unwrap_or_default().trim().to_string(),
        ingredients,
        instructions,
        cook_time: parsed.cook_time.unwrap_or_default().trim().to_string(),
        servings,
        difficulty,
    })
}

fn non_blank_lines(lines: Option<Vec<String>>) -> Option<Vec<String>> {
    let lines: Vec<String> = lines?
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    (!lines.is_empty()).then_some(lines)
}

fn parse_servings(value: &Value) -> Option<i32> {
    let servings = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };

    i32::try_from(servings).ok().filter(|s| *s > 0)
}

/// Removes a surrounding Markdown code fence (```json ... ```) if present.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };

    let inner = inner.trim_start();
    let inner = inner
        .strip_prefix("json")
        .or_else(|| inner.strip_prefix("JSON"))
        .unwrap_or(inner);

    inner.trim()
}
