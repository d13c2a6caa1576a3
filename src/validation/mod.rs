//! Parameter validation against catalog schemas.
//!
//! The validation algorithm is a capability: a [`ValidatorEngine`] compiles a
//! [`Schema`] into a [`SchemaValidator`], which reports the first failure it
//! finds. [`JsonSchemaEngine`] is the default; tests and integrators can
//! inject their own.

pub mod cache;
pub mod engine;

pub use cache::ParameterValidators;
pub use engine::JsonSchemaEngine;

use crate::client::ApiError;
use crate::schema::Schema;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// One step of a breadcrumb into a JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(i) => write!(f, "{}", i),
            PathSegment::Key(k) => write!(f, "{}", k),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// First schema violation found in a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Breadcrumb to the offending field; empty for the root.
    pub path: Vec<PathSegment>,
    pub message: String,
    /// The value found at `path`.
    pub received: Value,
}

impl ValidationFailure {
    pub fn new(path: Vec<PathSegment>, message: impl Into<String>, received: Value) -> Self {
        Self {
            path,
            message: message.into(),
            received,
        }
    }

    /// Breadcrumb joined with dots, e.g. `departments.0.name`.
    pub fn dotted_path(&self) -> String {
        self.path
            .iter()
            .map(PathSegment::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[schema] [{}] {} received: {}",
            self.dotted_path(),
            self.message,
            display_received(&self.received)
        )
    }
}

impl std::error::Error for ValidationFailure {}

fn display_received(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A compiled, reusable check of values against one schema.
pub trait SchemaValidator: Send + Sync {
    /// `Ok(())` or the first failure; never accumulates.
    fn validate(&self, value: &Value) -> std::result::Result<(), ValidationFailure>;
}

/// Compiles schemas into validators.
pub trait ValidatorEngine: Send + Sync {
    fn compile(&self, schema: &Schema) -> Result<Arc<dyn SchemaValidator>>;
}

/// Shape a validation failure for callers: structured `parameter` plus a log line.
pub fn render_error(failure: &ValidationFailure) -> ApiError {
    ApiError {
        message: Some(failure.to_string()),
        parameter: Some(failure.clone()),
        ..ApiError::default()
    }
}
