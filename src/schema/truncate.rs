//! Schema-driven truncation of over-length strings.
//!
//! The walk is copy-on-write: a node that needs no change comes back as
//! `Cow::Borrowed` of the caller's value, so an untouched parameter object is
//! never cloned. Nothing here rejects input; wrong runtime types and schema
//! nodes without applicable constraints pass through unchanged.

use super::Schema;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Truncate `value` against `schema`, or return it untouched when truncation is disabled.
pub fn truncate_values<'a>(
    schema: &Schema,
    value: &'a Value,
    allow_truncation: bool,
) -> Cow<'a, Value> {
    if !allow_truncation {
        return Cow::Borrowed(value);
    }
    truncate(schema, value)
}

/// Walk `schema` and `value` together, shortening strings above their `maxLength`.
pub fn truncate<'a>(schema: &Schema, value: &'a Value) -> Cow<'a, Value> {
    match (schema, value) {
        (Schema::String(s), Value::String(text)) => match s.max_length {
            Some(max) => match brevity(text, max) {
                Cow::Owned(short) => Cow::Owned(Value::String(short)),
                Cow::Borrowed(_) => Cow::Borrowed(value),
            },
            None => Cow::Borrowed(value),
        },
        (Schema::Array(a), Value::Array(elements)) => {
            let Some(items) = a.items.as_deref() else {
                return Cow::Borrowed(value);
            };
            let truncated: Vec<Cow<'a, Value>> =
                elements.iter().map(|e| truncate(items, e)).collect();
            if truncated.iter().all(|e| matches!(e, Cow::Borrowed(_))) {
                return Cow::Borrowed(value);
            }
            Cow::Owned(Value::Array(
                truncated.into_iter().map(Cow::into_owned).collect(),
            ))
        }
        (Schema::Object(o), Value::Object(fields)) => {
            // Keys unknown to the schema are copied through; rejecting them is the validator's job.
            let truncated: Vec<(&'a String, Cow<'a, Value>)> = fields
                .iter()
                .map(|(key, field)| match o.properties.get(key) {
                    Some(property) => (key, truncate(property, field)),
                    None => (key, Cow::Borrowed(field)),
                })
                .collect();
            if truncated.iter().all(|(_, f)| matches!(f, Cow::Borrowed(_))) {
                return Cow::Borrowed(value);
            }
            let mut out = Map::with_capacity(truncated.len());
            for (key, field) in truncated {
                out.insert(key.clone(), field.into_owned());
            }
            Cow::Owned(Value::Object(out))
        }
        (Schema::AnyOf(members), _) => members
            .iter()
            .find(|m| m.matches_kind(value))
            .map_or(Cow::Borrowed(value), |m| truncate(m, value)),
        _ => Cow::Borrowed(value),
    }
}

/// Middle-out truncation: keep `floor(L/2)` chars from each end of `text`.
///
/// Lengths are counted in chars. The result is `2 * floor(L/2)` chars long, so
/// an odd limit loses one more char than strictly needed. No marker is inserted
/// where the middle was removed.
pub fn brevity(text: &str, max_length: u64) -> Cow<'_, str> {
    let length = text.chars().count();
    let max = usize::try_from(max_length).unwrap_or(usize::MAX);
    if length <= max {
        return Cow::Borrowed(text);
    }
    let half = max / 2;
    let head_end = byte_offset(text, half);
    let tail_start = byte_offset(text, length - half);
    let mut out = String::with_capacity(head_end + text.len() - tail_start);
    out.push_str(&text[..head_end]);
    out.push_str(&text[tail_start..]);
    Cow::Owned(out)
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(offset, _)| offset)
}
