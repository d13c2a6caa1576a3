//! Catalog self-consistency: every published version is resolvable and its
//! worked example passes its own parameter schema.

use kequtech_api::catalog::{Catalog, CatalogLookup};
use kequtech_api::validation::{JsonSchemaEngine, ParameterValidators, ValidatorEngine};
use std::collections::HashSet;
use std::sync::Arc;

#[test]
fn every_example_validates_against_its_parameter_schema() {
    let catalog = Catalog::builtin();
    let lookup = CatalogLookup::new(Arc::clone(&catalog));
    let validators = ParameterValidators::new(Arc::new(JsonSchemaEngine));

    for path in catalog.versioned_paths() {
        let version = lookup.resolve(&path).unwrap();
        let validator = validators.get(&path, &lookup).unwrap();
        if let Err(failure) = validator.validate(&version.example) {
            panic!("example for {} is invalid: {}", path, failure);
        }
    }
}

#[test]
fn every_response_schema_compiles() {
    let catalog = Catalog::builtin();
    for product in catalog.products() {
        for version in &product.versions {
            JsonSchemaEngine
                .compile(&version.response)
                .unwrap_or_else(|e| panic!("{} response schema: {}", product.name, e));
        }
    }
}

#[test]
fn builtin_catalog_lists_all_v1_products() {
    let paths: HashSet<String> = Catalog::builtin().versioned_paths().into_iter().collect();
    for expected in [
        "/v1/message-parser",
        "/v1/message-router",
        "/v1/message-responder",
        "/v1/summarize-text",
        "/v1/summarize-url",
        "/v1/character-generator",
    ] {
        assert!(paths.contains(expected), "missing {}", expected);
    }
    assert_eq!(paths.len(), 6);
}

#[test]
fn endpoints_are_unique() {
    let catalog = Catalog::builtin();
    let endpoints: HashSet<&str> = catalog
        .products()
        .iter()
        .map(|p| p.endpoint.as_str())
        .collect();
    assert_eq!(endpoints.len(), catalog.products().len());
}

#[test]
fn self_description_carries_pricing_and_limits() {
    let doc = Catalog::builtin().to_json();
    let products = doc["products"].as_array().unwrap();
    let generator = products
        .iter()
        .find(|p| p["endpoint"] == "/character-generator")
        .unwrap();
    let v1 = &generator["versions"][0];
    assert_eq!(v1["path"], "/v1/character-generator");
    assert_eq!(v1["tokens"], 25);
    assert_eq!(v1["rateLimit"]["max"], 10);
    assert_eq!(v1["rateLimit"]["seconds"], 60);
    assert_eq!(v1["parameters"]["type"], "object");
    assert_eq!(doc["version"], "2025-12-01");
}
