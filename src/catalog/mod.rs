//! Static catalog of API products and their versions.
//!
//! # Catalog
//!
//! Every product owns an ordered list of immutable versions. A version is
//! addressed by its versioned path `/v{N}{endpoint}`, where `N` is the 1-based
//! position in that list. Versions are only ever appended.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`lookup`] | Versioned path parsing and memoized resolution |
//! | [`endpoint`] | Typed binding between a path and its parameter/response types |
//! | [`descriptions`] | Long-form product descriptions |
//! | [`v1`] | Schemas, examples and types of the v1 products |

pub mod descriptions;
pub mod endpoint;
pub mod lookup;
pub mod v1;

pub use endpoint::Endpoint;
pub use lookup::{parse_versioned_path, CatalogError, CatalogLookup};

use crate::schema::Schema;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern compiles"));

static BUILTIN: Lazy<Arc<Catalog>> = Lazy::new(|| Arc::new(Catalog::from_products(builtin_products())));

/// Default rate limit applied by the service when the caller does not override it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateLimitDefault {
    pub max: u32,
    pub seconds: u32,
}

/// Schemas and worked example of one version, before pricing and dating.
#[derive(Debug, Clone)]
pub struct VersionSchemas {
    pub parameters: Schema,
    pub response: Schema,
    pub example: Value,
}

/// One immutable revision of a product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVersion {
    /// Tokens charged per call.
    pub tokens: u32,
    pub parameters: Schema,
    pub response: Schema,
    pub example: Value,
    pub rate_limit: RateLimitDefault,
    pub package_version: String,
    /// Publication date, `YYYY-MM-DD`.
    pub added: String,
}

impl ProductVersion {
    pub fn new(
        schemas: VersionSchemas,
        tokens: u32,
        rate_limit: RateLimitDefault,
        package_version: impl Into<String>,
        added: impl Into<String>,
    ) -> Self {
        Self {
            tokens,
            parameters: schemas.parameters,
            response: schemas.response,
            example: schemas.example,
            rate_limit,
            package_version: package_version.into(),
            added: added.into(),
        }
    }
}

/// A named API offering.
#[derive(Debug, Clone)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub blurb: String,
    /// Path segment such as `/message-parser`; unique across the catalog.
    pub endpoint: String,
    pub versions: Vec<Arc<ProductVersion>>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        blurb: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            blurb: blurb.into(),
            endpoint: endpoint.into(),
            versions: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: ProductVersion) -> Self {
        self.versions.push(Arc::new(version));
        self
    }

    /// Versioned paths of this product, oldest first.
    pub fn versioned_paths(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.versions.len()).map(move |n| format!("/v{}{}", n, self.endpoint))
    }
}

/// The full set of products known to a client.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking endpoint uniqueness and version dates.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !product.endpoint.starts_with('/') || product.endpoint.len() < 2 {
                return Err(CatalogError::InvalidProduct {
                    endpoint: product.endpoint.clone(),
                    reason: "endpoint must be a '/'-prefixed path segment".to_string(),
                });
            }
            if !seen.insert(product.endpoint.as_str()) {
                return Err(CatalogError::DuplicateEndpoint {
                    endpoint: product.endpoint.clone(),
                });
            }
            if let Some(v) = product.versions.iter().find(|v| !DATE_PATTERN.is_match(&v.added)) {
                return Err(CatalogError::InvalidProduct {
                    endpoint: product.endpoint.clone(),
                    reason: format!("invalid publication date '{}'", v.added),
                });
            }
        }
        Ok(Self { products })
    }

    fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The catalog compiled into this crate.
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(&BUILTIN)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, endpoint: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.endpoint == endpoint)
    }

    /// Every versioned path of every product.
    pub fn versioned_paths(&self) -> Vec<String> {
        self.products
            .iter()
            .flat_map(Product::versioned_paths)
            .collect()
    }

    /// Publication date of the newest version in the catalog.
    pub fn catalog_version(&self) -> &str {
        let mut best: &str = "1970-01-01";
        for version in self.products.iter().flat_map(|p| p.versions.iter()) {
            if version.added.as_str() > best {
                best = &version.added;
            }
        }
        best
    }

    /// Machine-readable self-description of the catalog.
    pub fn to_json(&self) -> Value {
        let products: Vec<Value> = self
            .products
            .iter()
            .map(|p| {
                let versions: Vec<Value> = p
                    .versions
                    .iter()
                    .zip(p.versioned_paths())
                    .map(|(v, path)| {
                        let mut entry = json!(v.as_ref());
                        entry["path"] = Value::String(path);
                        entry
                    })
                    .collect();
                json!({
                    "name": p.name,
                    "description": p.description,
                    "blurb": p.blurb,
                    "endpoint": p.endpoint,
                    "versions": versions,
                })
            })
            .collect();
        json!({
            "version": self.catalog_version(),
            "products": products,
        })
    }
}

fn builtin_products() -> Vec<Product> {
    const V1_ADDED: &str = "2025-12-01";
    let limit = |max| RateLimitDefault { max, seconds: 60 };

    vec![
        Product::new(
            "Message Parser",
            descriptions::message_parser(),
            "Parse incoming message into structured fields.",
            "/message-parser",
        )
        .with_version(ProductVersion::new(
            v1::message_parser::schemas(),
            1,
            limit(60),
            "1.0.0",
            V1_ADDED,
        )),
        Product::new(
            "Message Router",
            descriptions::message_router(),
            "Detect spam and route to an internal department.",
            "/message-router",
        )
        .with_version(ProductVersion::new(
            v1::message_router::schemas(),
            5,
            limit(200),
            "1.0.0",
            V1_ADDED,
        )),
        Product::new(
            "Message Responder",
            descriptions::message_responder(),
            "Draft quick on-brand replies based on your context.",
            "/message-responder",
        )
        .with_version(ProductVersion::new(
            v1::message_responder::schemas(),
            8,
            limit(200),
            "1.0.0",
            V1_ADDED,
        )),
        Product::new(
            "Summarize Text",
            descriptions::summarize_text(),
            "Summarize content into a concise description.",
            "/summarize-text",
        )
        .with_version(ProductVersion::new(
            v1::summarize_text::schemas(),
            4,
            limit(200),
            "1.0.0",
            V1_ADDED,
        )),
        Product::new(
            "Summarize Url",
            descriptions::summarize_url(),
            "Summarize any public url into a link preview.",
            "/summarize-url",
        )
        .with_version(ProductVersion::new(
            v1::summarize_url::schemas(),
            8,
            limit(200),
            "1.0.0",
            V1_ADDED,
        )),
        Product::new(
            "Character Generator",
            descriptions::character_generator(),
            "Create a complete, reusable character sheet.",
            "/character-generator",
        )
        .with_version(ProductVersion::new(
            v1::character_generator::schemas(),
            25,
            limit(10),
            "1.0.0",
            V1_ADDED,
        )),
    ]
}
