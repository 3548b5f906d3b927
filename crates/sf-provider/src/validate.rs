//! Completion response validation
//!
//! Two distinct failure domains are kept apart: the outer envelope shape
//! (what the completion API returns) and the model's inner output (the JSON
//! text it was instructed to produce). Both map to the same HTTP status at
//! the route layer, but the categories stay separate.

use serde::Deserialize;
use serde_json::Value;
use sf_types::{AppError, AppResult};

/// Mapping of generated file name to file content. Must be non-empty; no
/// fixed key set is enforced.
pub type GeneratedArtifacts = serde_json::Map<String, Value>;

#[derive(Debug, Deserialize)]
struct CompletionEnvelope {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

/// Extract the generated file mapping from a raw (already 2xx) response body.
pub fn extract_artifacts(body: &str) -> AppResult<GeneratedArtifacts> {
    let envelope: CompletionEnvelope = serde_json::from_str(body).map_err(|e| {
        AppError::Envelope(format!("Response did not match the completion schema: {}", e))
    })?;

    let Some(choice) = envelope.choices.into_iter().next() else {
        return Err(AppError::Envelope(
            "Response contained no choices".to_string(),
        ));
    };

    let inner: Value = serde_json::from_str(&choice.message.content).map_err(|e| {
        AppError::ModelOutput(format!("Model reply was not valid JSON: {}", e))
    })?;

    match inner {
        Value::Object(files) if !files.is_empty() => Ok(files),
        Value::Object(_) => Err(AppError::ModelOutput(
            "Model reply was an empty object".to_string(),
        )),
        other => Err(AppError::ModelOutput(format!(
            "Model reply was not a JSON object (got {})",
            type_name(&other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
