//! Declarative constraint trees shared by truncation and validation.
//!
//! A [`Schema`] is a tagged variant per JSON type, each carrying only the
//! constraints that make sense for it. Schemas are built once (the catalog
//! holds them for the process lifetime) and are never mutated at request time.
//!
//! ```rust
//! use kequtech_api::schema::Schema;
//!
//! let schema: Schema = Schema::object()
//!     .property("message", Schema::string().min_length(10).max_length(1500))
//!     .required(["message"])
//!     .additional_properties(false)
//!     .into();
//! assert_eq!(schema.type_name(), "object");
//! ```

pub mod truncate;

pub use truncate::{brevity, truncate, truncate_values};

use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// A node of the constraint tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    String(StringSchema),
    Number(NumberSchema),
    Boolean(BooleanSchema),
    Array(ArraySchema),
    Object(ObjectSchema),
    /// Union of alternatives; a value must match at least one member.
    AnyOf(Vec<Schema>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringSchema {
    pub description: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub format: Option<String>,
    pub enumeration: Vec<String>,
}

/// `integer` and `number` share constraints; `integer` selects the tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberSchema {
    pub description: Option<String>,
    pub integer: bool,
    pub minimum: Option<Number>,
    pub maximum: Option<Number>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BooleanSchema {
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArraySchema {
    pub description: Option<String>,
    pub items: Option<Box<Schema>>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSchema {
    pub description: Option<String>,
    pub properties: BTreeMap<String, Schema>,
    pub required: Vec<String>,
    pub additional_properties: bool,
}

impl Default for ObjectSchema {
    fn default() -> Self {
        Self {
            description: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
            additional_properties: true,
        }
    }
}

impl Schema {
    pub fn string() -> StringSchema {
        StringSchema::default()
    }

    pub fn integer() -> NumberSchema {
        NumberSchema {
            integer: true,
            ..NumberSchema::default()
        }
    }

    pub fn number() -> NumberSchema {
        NumberSchema::default()
    }

    pub fn boolean() -> BooleanSchema {
        BooleanSchema::default()
    }

    pub fn array(items: impl Into<Schema>) -> ArraySchema {
        ArraySchema {
            items: Some(Box::new(items.into())),
            ..ArraySchema::default()
        }
    }

    pub fn object() -> ObjectSchema {
        ObjectSchema::default()
    }

    pub fn any_of(members: impl IntoIterator<Item = Schema>) -> Schema {
        Schema::AnyOf(members.into_iter().collect())
    }

    /// JSON type tag of this node (`"anyOf"` for unions).
    pub fn type_name(&self) -> &'static str {
        match self {
            Schema::String(_) => "string",
            Schema::Number(n) if n.integer => "integer",
            Schema::Number(_) => "number",
            Schema::Boolean(_) => "boolean",
            Schema::Array(_) => "array",
            Schema::Object(_) => "object",
            Schema::AnyOf(_) => "anyOf",
        }
    }

    /// Whether the runtime JSON kind of `value` is one this node (or a union member) declares.
    pub fn matches_kind(&self, value: &Value) -> bool {
        match (self, value) {
            (Schema::String(_), Value::String(_)) => true,
            (Schema::Number(n), Value::Number(num)) => !n.integer || num.is_i64() || num.is_u64(),
            (Schema::Boolean(_), Value::Bool(_)) => true,
            (Schema::Array(_), Value::Array(_)) => true,
            (Schema::Object(_), Value::Object(_)) => true,
            (Schema::AnyOf(members), _) => members.iter().any(|m| m.matches_kind(value)),
            _ => false,
        }
    }

    /// Render as a Draft 7 JSON Schema document.
    pub fn to_json(&self) -> Value {
        let mut out = Map::new();
        match self {
            Schema::String(s) => {
                out.insert("type".into(), "string".into());
                put_description(&mut out, &s.description);
                put_opt(&mut out, "minLength", s.min_length);
                put_opt(&mut out, "maxLength", s.max_length);
                if let Some(format) = &s.format {
                    out.insert("format".into(), format.clone().into());
                }
                if !s.enumeration.is_empty() {
                    out.insert("enum".into(), s.enumeration.clone().into());
                }
            }
            Schema::Number(n) => {
                out.insert("type".into(), self.type_name().into());
                put_description(&mut out, &n.description);
                if let Some(min) = &n.minimum {
                    out.insert("minimum".into(), Value::Number(min.clone()));
                }
                if let Some(max) = &n.maximum {
                    out.insert("maximum".into(), Value::Number(max.clone()));
                }
            }
            Schema::Boolean(b) => {
                out.insert("type".into(), "boolean".into());
                put_description(&mut out, &b.description);
            }
            Schema::Array(a) => {
                out.insert("type".into(), "array".into());
                put_description(&mut out, &a.description);
                if let Some(items) = &a.items {
                    out.insert("items".into(), items.to_json());
                }
                put_opt(&mut out, "minItems", a.min_items);
                put_opt(&mut out, "maxItems", a.max_items);
            }
            Schema::Object(o) => {
                out.insert("type".into(), "object".into());
                put_description(&mut out, &o.description);
                let properties: Map<String, Value> = o
                    .properties
                    .iter()
                    .map(|(name, schema)| (name.clone(), schema.to_json()))
                    .collect();
                out.insert("properties".into(), Value::Object(properties));
                out.insert("required".into(), o.required.clone().into());
                out.insert(
                    "additionalProperties".into(),
                    o.additional_properties.into(),
                );
            }
            Schema::AnyOf(members) => {
                out.insert(
                    "anyOf".into(),
                    Value::Array(members.iter().map(Schema::to_json).collect()),
                );
            }
        }
        Value::Object(out)
    }
}

fn put_description(out: &mut Map<String, Value>, description: &Option<String>) {
    if let Some(d) = description {
        out.insert("description".into(), d.clone().into());
    }
}

fn put_opt(out: &mut Map<String, Value>, key: &str, value: Option<u64>) {
    if let Some(v) = value {
        out.insert(key.into(), v.into());
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl StringSchema {
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn min_length(mut self, n: u64) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn max_length(mut self, n: u64) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enumeration = values.into_iter().map(Into::into).collect();
        self
    }
}

impl NumberSchema {
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn minimum(mut self, n: impl Into<Number>) -> Self {
        self.minimum = Some(n.into());
        self
    }

    pub fn maximum(mut self, n: impl Into<Number>) -> Self {
        self.maximum = Some(n.into());
        self
    }
}

impl BooleanSchema {
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }
}

impl ArraySchema {
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn min_items(mut self, n: u64) -> Self {
        self.min_items = Some(n);
        self
    }

    pub fn max_items(mut self, n: u64) -> Self {
        self.max_items = Some(n);
        self
    }
}

impl ObjectSchema {
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn property(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.properties.insert(name.into(), schema.into());
        self
    }

    pub fn required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn additional_properties(mut self, allowed: bool) -> Self {
        self.additional_properties = allowed;
        self
    }
}

impl From<StringSchema> for Schema {
    fn from(s: StringSchema) -> Self {
        Schema::String(s)
    }
}

impl From<NumberSchema> for Schema {
    fn from(n: NumberSchema) -> Self {
        Schema::Number(n)
    }
}

impl From<BooleanSchema> for Schema {
    fn from(b: BooleanSchema) -> Self {
        Schema::Boolean(b)
    }
}

impl From<ArraySchema> for Schema {
    fn from(a: ArraySchema) -> Self {
        Schema::Array(a)
    }
}

impl From<ObjectSchema> for Schema {
    fn from(o: ObjectSchema) -> Self {
        Schema::Object(o)
    }
}
