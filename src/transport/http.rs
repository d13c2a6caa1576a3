use super::{HttpResponse, PreparedRequest, Transport};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Proxy;
use std::env;
use std::time::Duration;
use tracing::debug;

/// reqwest-backed transport with env-overridable pool and timeout settings.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build with defaults read from the environment:
    /// - `KEQUTECH_HTTP_TIMEOUT_SECS` (default 30)
    /// - `KEQUTECH_HTTP_POOL_MAX_IDLE_PER_HOST` (default 32)
    /// - `KEQUTECH_HTTP_POOL_IDLE_TIMEOUT_SECS` (default 90)
    /// - `KEQUTECH_PROXY_URL` (optional)
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    /// Like [`HttpTransport::new`], with an explicit timeout taking precedence over the env.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let timeout = timeout.unwrap_or_else(|| {
            Duration::from_secs(env_parse("KEQUTECH_HTTP_TIMEOUT_SECS").unwrap_or(30))
        });

        let mut builder = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(env_parse("KEQUTECH_HTTP_POOL_MAX_IDLE_PER_HOST").unwrap_or(32))
            .pool_idle_timeout(Some(Duration::from_secs(
                env_parse("KEQUTECH_HTTP_POOL_IDLE_TIMEOUT_SECS").unwrap_or(90),
            )));

        if let Ok(proxy_url) = env::var("KEQUTECH_PROXY_URL") {
            if let Ok(proxy) = Proxy::all(&proxy_url) {
                builder = builder.proxy(proxy);
            }
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self { client })
    }

    /// Wrap a preconfigured reqwest client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.parse::<T>().ok())
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, request: PreparedRequest) -> Result<HttpResponse> {
        let response = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
