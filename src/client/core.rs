use super::builder::KequtechClientBuilder;
use super::options::CallOptions;
use super::request::RequestBuilder;
use super::response::{normalize, ApiResponse};
use crate::catalog::{Catalog, CatalogLookup, Endpoint};
use crate::schema::truncate_values;
use crate::transport::Transport;
use crate::validation::{render_error, ParameterValidators};
use crate::{Error, Result};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Typed client for the Kequtech API.
///
/// A call runs catalog lookup, truncation, validation, request composition,
/// the network round trip and response normalization, in that order. Schema
/// rejections come back as a 422 [`ApiResponse`] without touching the network.
pub struct KequtechClient {
    pub(crate) requests: RequestBuilder,
    pub(crate) lookup: CatalogLookup,
    pub(crate) validators: ParameterValidators,
    pub(crate) transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for KequtechClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KequtechClient")
            .field("requests", &self.requests)
            .finish_non_exhaustive()
    }
}

impl KequtechClient {
    /// Client for the production host with the given credential.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        KequtechClientBuilder::new().api_key(api_key).build()
    }

    pub fn builder() -> KequtechClientBuilder {
        KequtechClientBuilder::new()
    }

    pub fn host(&self) -> &str {
        self.requests.host()
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.lookup.catalog()
    }

    /// Call a typed endpoint.
    ///
    /// ```rust,no_run
    /// use kequtech_api::catalog::v1::{message_parser::MessageParserParameters, MessageParser};
    /// use kequtech_api::{CallOptions, KequtechClient};
    ///
    /// # async fn run() -> kequtech_api::Result<()> {
    /// let client = KequtechClient::new("my-api-key")?;
    /// let params = MessageParserParameters {
    ///     message: "Hi, Mia mia@acme.dev. Could you help with a small site rebuild next month?".into(),
    /// };
    /// let response = client.call::<MessageParser>(&params, CallOptions::new()).await?;
    /// if let Some(parsed) = response.data() {
    ///     println!("{:?}", parsed);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn call<E: Endpoint>(
        &self,
        parameters: &E::Parameters,
        options: CallOptions,
    ) -> Result<ApiResponse<E::Response>> {
        let value = serde_json::to_value(parameters)?;
        let response = self.call_raw(E::PATH, value, options).await?;
        response
            .try_map(serde_json::from_value::<E::Response>)
            .map_err(Error::from)
    }

    /// Call any versioned path with untyped parameters.
    pub async fn call_raw(
        &self,
        path: &str,
        parameters: Value,
        options: CallOptions,
    ) -> Result<ApiResponse<Value>> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();

        // Misuse aborts before anything else happens.
        let headers = self.requests.headers(options.actor.as_ref())?;
        let version = self.lookup.resolve(path)?;
        let validator = self.validators.get(path, &self.lookup)?;

        let shaped = truncate_values(&version.parameters, &parameters, options.allow_truncation);
        if let std::borrow::Cow::Owned(_) = shaped {
            debug!(request_id = %request_id, path, "parameters truncated");
        }

        if let Err(failure) = validator.validate(&shaped) {
            warn!(
                request_id = %request_id,
                path,
                field = %failure.dotted_path(),
                "parameters rejected by schema"
            );
            return Ok(ApiResponse::unprocessable(render_error(&failure)));
        }

        let request = self.requests.build(path, headers, &shaped)?;
        if let Some(token) = &options.cancel {
            if token.is_cancelled() {
                return Err(Error::Cancelled);
            }
        }

        let send = self.transport.post(request);
        let http = match &options.cancel {
            Some(token) => tokio::select! {
                _ = token.cancelled() => {
                    warn!(request_id = %request_id, path, "call cancelled");
                    return Err(Error::Cancelled);
                }
                result = send => result?,
            },
            None => send.await?,
        };

        let status_text = http.status.canonical_reason().unwrap_or_default();
        let response = normalize(
            http.status,
            status_text,
            &http.headers,
            &http.body,
            options.actor_id(),
        );

        info!(
            request_id = %request_id,
            path,
            status = response.status,
            ok = response.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "call completed"
        );

        Ok(response)
    }
}
