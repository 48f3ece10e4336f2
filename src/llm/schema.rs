//! Strict JSON schemas for structured output.
//!
//! The provider's strict mode only accepts a subset of JSON Schema: every
//! object must set `additionalProperties: false`, list all of its properties
//! in `required` (optional fields stay nullable through their type), and the
//! schema must be self-contained without `$ref`.

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Types that can be requested as structured output
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// Schema of `Self` in strict-mode form
    fn strict_schema() -> Value {
        let schema = serde_json::to_value(schema_for!(Self)).unwrap_or_default();
        make_strict(schema)
    }

    /// Name sent alongside the schema in the request
    fn format_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

/// Rewrite a schemars root schema into its strict-mode form
pub fn make_strict(mut schema: Value) -> Value {
    let definitions = schema
        .as_object_mut()
        .and_then(|root| root.remove("definitions"))
        .unwrap_or(Value::Null);

    inline_refs(&mut schema, &definitions);
    close_objects(&mut schema);

    if let Value::Object(root) = &mut schema {
        root.remove("$schema");
        root.remove("title");
    }
    schema
}

fn inline_refs(value: &mut Value, definitions: &Value) {
    match value {
        Value::Object(map) => {
            let target = map
                .get("$ref")
                .and_then(Value::as_str)
                .and_then(|path| path.strip_prefix("#/definitions/"))
                .and_then(|name| definitions.get(name))
                .cloned();

            if let Some(mut resolved) = target {
                inline_refs(&mut resolved, definitions);
                *value = resolved;
                return;
            }

            for child in map.values_mut() {
                inline_refs(child, definitions);
            }
        }
        Value::Array(items) => {
            for item in items {
                inline_refs(item, definitions);
            }
        }
        _ => {}
    }
}

fn is_object_schema(map: &serde_json::Map<String, Value>) -> bool {
    match map.get("type") {
        Some(Value::String(t)) => t == "object",
        Some(Value::Array(types)) => types.iter().any(|t| t == "object"),
        _ => false,
    }
}

fn close_objects(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if is_object_schema(map) {
                map.insert("additionalProperties".to_string(), Value::Bool(false));

                let required: Option<Vec<Value>> = map
                    .get("properties")
                    .and_then(Value::as_object)
                    .map(|props| props.keys().cloned().map(Value::String).collect());
                if let Some(required) = required {
                    map.insert("required".to_string(), Value::Array(required));
                }
            }

            for child in map.values_mut() {
                close_objects(child);
            }
        }
        Value::Array(items) => {
            for item in items {
                close_objects(item);
            }
        }
        _ => {}
    }
}
