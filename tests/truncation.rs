//! Truncation properties over the real catalog schemas.

use kequtech_api::catalog::{Catalog, CatalogLookup};
use kequtech_api::schema::{brevity, truncate, truncate_values, Schema};
use serde_json::{json, Value};
use std::borrow::Cow;
use std::sync::Arc;

fn schema(path: &str) -> Schema {
    let lookup = CatalogLookup::new(Catalog::builtin());
    lookup.resolve(path).unwrap().parameters.clone()
}

fn router_input() -> Value {
    json!({
        "message": "m".repeat(4000),
        "subject": "s".repeat(121),
        "context": "short context",
        "guidance": "g".repeat(401),
        "departments": [
            { "name": "n".repeat(40), "description": "d".repeat(300) },
            { "name": "ok", "description": "fine" },
            "not an object"
        ],
        "unknown": "x".repeat(5000)
    })
}

#[test]
fn length_bound_holds_for_every_string_field() {
    let schema = schema("/v1/message-router");
    let out = truncate(&schema, &router_input()).into_owned();

    assert_eq!(out["message"].as_str().unwrap().chars().count(), 1500);
    assert_eq!(out["subject"].as_str().unwrap().chars().count(), 120);
    assert_eq!(out["context"], "short context");
    assert_eq!(out["guidance"].as_str().unwrap().chars().count(), 400);
    assert_eq!(out["departments"][0]["name"].as_str().unwrap().len(), 32);
    assert_eq!(out["departments"][0]["description"].as_str().unwrap().len(), 120);
}

#[test]
fn structure_is_preserved() {
    let schema = schema("/v1/message-router");
    let input = router_input();
    let out = truncate(&schema, &input).into_owned();

    let in_keys: Vec<&String> = input.as_object().unwrap().keys().collect();
    let out_keys: Vec<&String> = out.as_object().unwrap().keys().collect();
    assert_eq!(in_keys, out_keys);
    assert_eq!(out["departments"].as_array().unwrap().len(), 3);
    assert_eq!(out["departments"][1], json!({ "name": "ok", "description": "fine" }));
    assert_eq!(out["departments"][2], "not an object");
    // Fields the schema does not describe are copied through untouched.
    assert_eq!(out["unknown"], input["unknown"]);
}

#[test]
fn truncation_is_idempotent() {
    for path in Catalog::builtin().versioned_paths() {
        let schema = schema(&path);
        let input = router_input();
        let once = truncate(&schema, &input).into_owned();
        let twice = truncate(&schema, &once);
        assert!(matches!(twice, Cow::Borrowed(_)), "{} re-truncated", path);
        assert_eq!(*twice, once);
    }
}

#[test]
fn disabled_truncation_is_identity() {
    let schema = schema("/v1/message-router");
    let input = router_input();
    let out = truncate_values(&schema, &input, false);
    match out {
        Cow::Borrowed(v) => assert!(std::ptr::eq(v, &input)),
        Cow::Owned(_) => panic!("disabled truncation must not copy"),
    }
}

#[test]
fn odd_limits_lose_one_character() {
    for (len, max) in [(10usize, 7u64), (10, 8), (3, 1), (5, 5), (4, 9)] {
        let text: String = ('a'..='z').cycle().take(len).collect();
        let out = brevity(&text, max);
        let expected = if len as u64 <= max { len } else { 2 * (max as usize / 2) };
        assert_eq!(out.chars().count(), expected, "len={} max={}", len, max);
    }
}

#[test]
fn url_field_keeps_lead_and_tail() {
    let schema = schema("/v1/summarize-url");
    let url = format!("https://example.com/{}end", "p".repeat(2100));
    let out = truncate(&schema, &json!({ "url": url })).into_owned();
    let short = out["url"].as_str().unwrap();
    assert_eq!(short.len(), 2000);
    assert!(short.starts_with("https://example.com/"));
    assert!(short.ends_with("end"));
}

#[test]
fn shared_schema_is_not_mutated() {
    let lookup = CatalogLookup::new(Catalog::builtin());
    let version = lookup.resolve("/v1/message-parser").unwrap();
    let before = version.parameters.clone();
    let _ = truncate(&version.parameters, &json!({ "message": "x".repeat(3000) }));
    assert_eq!(version.parameters, before);
    assert!(Arc::ptr_eq(&version, &lookup.resolve("/v1/message-parser").unwrap()));
}
