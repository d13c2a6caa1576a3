//! Validation scenarios over catalog schemas, including the interaction with truncation.

use kequtech_api::catalog::{Catalog, CatalogLookup};
use kequtech_api::schema::{truncate_values, Schema};
use kequtech_api::validation::{
    render_error, JsonSchemaEngine, ParameterValidators, PathSegment, SchemaValidator,
    ValidationFailure, ValidatorEngine,
};
use kequtech_api::{CallOptions, KequtechClientBuilder};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct Fixture {
    lookup: CatalogLookup,
    validators: ParameterValidators,
}

impl Fixture {
    fn new() -> Self {
        Self {
            lookup: CatalogLookup::new(Catalog::builtin()),
            validators: ParameterValidators::new(Arc::new(JsonSchemaEngine)),
        }
    }

    fn check(&self, path: &str, value: &Value) -> Result<(), ValidationFailure> {
        self.validators
            .get(path, &self.lookup)
            .unwrap()
            .validate(value)
    }

    fn shape_then_check(
        &self,
        path: &str,
        value: &Value,
        allow_truncation: bool,
    ) -> Result<(), ValidationFailure> {
        let version = self.lookup.resolve(path).unwrap();
        let shaped = truncate_values(&version.parameters, value, allow_truncation);
        self.check(path, &shaped)
    }
}

#[test]
fn friendly_message_passes_parser_schema() {
    let fixture = Fixture::new();
    let message = "Hi, Mia mia@acme.dev. Could you help with a small site rebuild next month?";
    assert!(fixture
        .check("/v1/message-parser", &json!({ "message": message }))
        .is_ok());
}

#[test]
fn short_message_fails_at_message_citing_min_length() {
    let fixture = Fixture::new();
    let failure = fixture
        .check("/v1/message-parser", &json!({ "message": "short" }))
        .unwrap_err();

    assert_eq!(failure.path, vec![PathSegment::Key("message".into())]);
    assert!(failure.message.contains("at least 10"), "{}", failure.message);
    assert_eq!(failure.received, json!("short"));

    let rendered = render_error(&failure);
    assert_eq!(
        rendered.message.as_deref(),
        Some("[schema] [message] must be at least 10 characters received: short")
    );
}

#[test]
fn truncation_rescues_length_only_violations() {
    let fixture = Fixture::new();
    let input = json!({ "text": "t".repeat(3500), "context": "c".repeat(450) });

    let failure = fixture
        .shape_then_check("/v1/summarize-text", &input, false)
        .unwrap_err();
    assert!(failure.message.contains("at most"), "{}", failure.message);

    assert!(fixture
        .shape_then_check("/v1/summarize-text", &input, true)
        .is_ok());
}

#[test]
fn truncation_does_not_rescue_other_violations() {
    let fixture = Fixture::new();
    let input = json!({ "text": "t".repeat(3500), "extra": true });
    let failure = fixture
        .shape_then_check("/v1/summarize-text", &input, true)
        .unwrap_err();
    assert_eq!(failure.dotted_path(), "extra");
}

#[test]
fn nested_department_failure_has_index_breadcrumb() {
    let fixture = Fixture::new();
    let failure = fixture
        .check(
            "/v1/message-router",
            &json!({
                "message": "Please route this message somewhere sensible.",
                "departments": [{ "name": "sales" }, { "name": "x" }]
            }),
        )
        .unwrap_err();
    assert_eq!(
        failure.path,
        vec![
            PathSegment::Key("departments".into()),
            PathSegment::Index(1),
            PathSegment::Key("name".into())
        ]
    );
}

#[test]
fn too_many_departments_is_rejected() {
    let fixture = Fixture::new();
    let departments: Vec<Value> = (0..16).map(|i| json!({ "name": format!("dept{}", i) })).collect();
    let failure = fixture
        .check(
            "/v1/message-router",
            &json!({ "message": "Please route this message.", "departments": departments }),
        )
        .unwrap_err();
    assert_eq!(failure.dotted_path(), "departments");
    assert!(failure.message.contains("at most 15"));
}

#[test]
fn character_generator_accepts_empty_parameters() {
    let fixture = Fixture::new();
    assert!(fixture.check("/v1/character-generator", &json!({})).is_ok());
    assert!(fixture
        .check("/v1/character-generator", &json!({ "genre": 3 }))
        .is_err());
}

#[test]
fn summarize_url_requires_url() {
    let fixture = Fixture::new();
    let failure = fixture
        .check("/v1/summarize-url", &json!({ "context": "profile" }))
        .unwrap_err();
    assert_eq!(failure.dotted_path(), "url");
}

/// Engine that accepts everything and counts compilations.
#[derive(Default)]
struct PermissiveEngine {
    compiled: AtomicUsize,
}

struct AcceptAll;

impl SchemaValidator for AcceptAll {
    fn validate(&self, _value: &Value) -> Result<(), ValidationFailure> {
        Ok(())
    }
}

impl ValidatorEngine for PermissiveEngine {
    fn compile(&self, _schema: &Schema) -> kequtech_api::Result<Arc<dyn SchemaValidator>> {
        self.compiled.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(AcceptAll))
    }
}

#[tokio::test]
async fn injected_engine_replaces_schema_checks() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/message-parser")
        .match_body(mockito::Matcher::Json(json!({ "message": "short" })))
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .expect(2)
        .create_async()
        .await;

    let engine = Arc::new(PermissiveEngine::default());
    let client = KequtechClientBuilder::new()
        .api_key("k")
        .host(server.url())
        .validator_engine(engine.clone())
        .build()
        .unwrap();

    for _ in 0..2 {
        let response = client
            .call_raw("/v1/message-parser", json!({ "message": "short" }), CallOptions::new())
            .await
            .unwrap();
        assert!(response.is_ok());
    }

    mock.assert_async().await;
    assert_eq!(engine.compiled.load(Ordering::SeqCst), 1);
}
