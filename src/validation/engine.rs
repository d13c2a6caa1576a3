//! Default validator engine backed by the `jsonschema` crate.

use super::{PathSegment, SchemaValidator, ValidationFailure, ValidatorEngine};
use crate::schema::Schema;
use crate::{Error, ErrorContext, Result};
use jsonschema::error::ValidationErrorKind;
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;
use std::sync::Arc;

/// Compiles catalog schemas as Draft 7 JSON Schema documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSchemaEngine;

impl ValidatorEngine for JsonSchemaEngine {
    fn compile(&self, schema: &Schema) -> Result<Arc<dyn SchemaValidator>> {
        let document = schema.to_json();
        let compiled = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&document)
            .map_err(|e| {
                Error::schema_with_context(
                    format!("Failed to compile schema: {}", e),
                    ErrorContext::new().with_source("jsonschema_engine"),
                )
            })?;
        Ok(Arc::new(CompiledSchema { compiled }))
    }
}

struct CompiledSchema {
    compiled: JSONSchema,
}

impl SchemaValidator for CompiledSchema {
    fn validate(&self, value: &Value) -> std::result::Result<(), ValidationFailure> {
        let mut errors = match self.compiled.validate(value) {
            Ok(()) => return Ok(()),
            Err(errors) => errors,
        };
        match errors.next() {
            Some(error) => Err(to_failure(value, &error)),
            None => Ok(()),
        }
    }
}

fn to_failure(root: &Value, error: &jsonschema::ValidationError<'_>) -> ValidationFailure {
    let mut path = breadcrumb(root, &error.instance_path.to_string());
    let mut received = error.instance.clone().into_owned();

    let message = match &error.kind {
        ValidationErrorKind::MinLength { limit } => {
            format!("must be at least {} characters", limit)
        }
        ValidationErrorKind::MaxLength { limit } => {
            format!("must be at most {} characters", limit)
        }
        ValidationErrorKind::MinItems { limit } => format!("must have at least {} items", limit),
        ValidationErrorKind::MaxItems { limit } => format!("must have at most {} items", limit),
        ValidationErrorKind::Required { property } => {
            let name = property
                .as_str()
                .map(|s| s.to_string())
                .unwrap_or_else(|| property.to_string());
            path.push(PathSegment::Key(name));
            received = Value::Null;
            "is required".to_string()
        }
        ValidationErrorKind::AdditionalProperties { unexpected } => match unexpected.first() {
            Some(key) => {
                received = received.get(key.as_str()).cloned().unwrap_or(Value::Null);
                path.push(PathSegment::Key(key.clone()));
                "is not an allowed property".to_string()
            }
            None => "has unknown properties".to_string(),
        },
        ValidationErrorKind::Enum { options } => {
            let allowed: Vec<String> = options
                .as_array()
                .map(|arr| {
                    arr.iter()
                        .map(|v| v.as_str().map(|s| s.to_string()).unwrap_or_else(|| v.to_string()))
                        .collect()
                })
                .unwrap_or_default();
            format!("must be one of: {}", allowed.join(", "))
        }
        _ => error.to_string(),
    };

    ValidationFailure {
        path,
        message,
        received,
    }
}

/// Turn a JSON pointer into keys and indices, using `root` to tell them apart.
fn breadcrumb(root: &Value, pointer: &str) -> Vec<PathSegment> {
    let mut node = Some(root);
    pointer
        .split('/')
        .skip(1)
        .map(|raw| {
            let token = raw.replace("~1", "/").replace("~0", "~");
            let segment = match (node, token.parse::<usize>()) {
                (Some(Value::Array(_)), Ok(i)) => PathSegment::Index(i),
                _ => PathSegment::Key(token),
            };
            node = node.and_then(|n| match &segment {
                PathSegment::Index(i) => n.get(*i),
                PathSegment::Key(k) => n.get(k.as_str()),
            });
            segment
        })
        .collect()
}
