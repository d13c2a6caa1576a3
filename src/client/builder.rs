use super::core::KequtechClient;
use super::request::RequestBuilder;
use crate::catalog::{Catalog, CatalogLookup};
use crate::transport::{HttpTransport, Transport};
use crate::validation::{JsonSchemaEngine, ParameterValidators, ValidatorEngine};
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Production origin used when no host is configured.
pub const DEFAULT_HOST: &str = "https://api.kequtech.com";

/// Builder for [`KequtechClient`].
///
/// Each client owns its catalog lookup and validator caches, so clients with
/// different hosts or credentials never share state.
pub struct KequtechClientBuilder {
    api_key: Option<String>,
    host: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
    engine: Option<Arc<dyn ValidatorEngine>>,
    catalog: Option<Arc<Catalog>>,
}

impl KequtechClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            host: None,
            timeout: None,
            transport: None,
            engine: None,
            catalog: None,
        }
    }

    /// Start from the environment:
    /// - `KEQUTECH_API_KEY`
    /// - `KEQUTECH_API_HOST` (optional)
    pub fn from_env() -> Self {
        let mut builder = Self::new();
        if let Ok(key) = std::env::var("KEQUTECH_API_KEY") {
            builder.api_key = Some(key);
        }
        if let Ok(host) = std::env::var("KEQUTECH_API_HOST") {
            if !host.trim().is_empty() {
                builder.host = Some(host);
            }
        }
        builder
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the origin, e.g. for a staging deployment or a mock server.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Request timeout for the default transport. Ignored with a custom transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn validator_engine(mut self, engine: Arc<dyn ValidatorEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Use a custom catalog instead of the built-in one.
    pub fn catalog(mut self, catalog: Arc<Catalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn build(self) -> Result<KequtechClient> {
        let host = normalize_host(self.host.as_deref().unwrap_or(DEFAULT_HOST))?;
        let requests = RequestBuilder::new(host, self.api_key.as_deref().unwrap_or_default())?;

        let transport = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::with_timeout(self.timeout)?),
        };
        let engine = self
            .engine
            .unwrap_or_else(|| Arc::new(JsonSchemaEngine));
        let catalog = self.catalog.unwrap_or_else(Catalog::builtin);

        Ok(KequtechClient {
            requests,
            lookup: CatalogLookup::new(catalog),
            validators: ParameterValidators::new(engine),
            transport,
        })
    }
}

impl Default for KequtechClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Absolute http(s) origin without a trailing slash.
fn normalize_host(host: &str) -> Result<String> {
    let host = host.trim();
    let parsed = Url::parse(host).map_err(|e| invalid_host(host, e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid_host(host, format!("unsupported scheme {}", parsed.scheme())));
    }
    Ok(host.trim_end_matches('/').to_string())
}

fn invalid_host(host: &str, details: String) -> Error {
    Error::configuration_with_context(
        format!("Invalid host: {}", host),
        ErrorContext::new()
            .with_field_path("builder.host")
            .with_details(details)
            .with_source("client_builder"),
    )
}
