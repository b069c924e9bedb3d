//! Output parsing: turns model text into schema-checked records.
//!
//! Decoding is a tagged result: a typed record or a `ParseValidationError`
//! saying why the text was rejected. Fields are never defaulted.

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use thiserror::Error;

use crate::llm_client::prompts::{render, FORMAT_INSTRUCTIONS_TEMPLATE};

#[derive(Debug, Error)]
pub enum ParseValidationError {
    #[error("model output is not valid JSON: {reason}")]
    Malformed { reason: String },

    #[error("model output does not match the {record} schema: {reason}")]
    Schema { record: String, reason: String },
}

/// Builds the formatting instructions describing `T`'s JSON shape.
pub fn format_instructions<T: JsonSchema>() -> String {
    let mut schema = serde_json::to_value(schema_for!(T)).unwrap_or_default();

    if let Some(root) = schema.as_object_mut() {
        root.remove("$schema");
        root.remove("title");
    }

    let schema = schema.to_string();
    render(FORMAT_INSTRUCTIONS_TEMPLATE, &[("schema", schema.as_str())])
}

/// Decodes model output as `T`.
pub fn parse_structured<T>(text: &str) -> Result<T, ParseValidationError>
where
    T: DeserializeOwned + JsonSchema,
{
    let candidate = extract_json(text);

    serde_json::from_str(candidate).map_err(|e| match e.classify() {
        Category::Data => ParseValidationError::Schema {
            record: T::schema_name(),
            reason: e.to_string(),
        },
        Category::Syntax | Category::Eof | Category::Io => ParseValidationError::Malformed {
            reason: e.to_string(),
        },
    })
}

/// Narrows a reply down to the JSON object it carries.
///
/// Models often wrap the object in code fences or a sentence of prose,
/// before or after it.
fn extract_json(text: &str) -> &str {
    let text = strip_json_fences(text);
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
