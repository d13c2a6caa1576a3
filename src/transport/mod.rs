//! HTTP transport as an injectable capability.
//!
//! The pipeline only needs "POST these headers and this body, give me back
//! status, headers and body". [`HttpTransport`] does that with reqwest; tests
//! can swap in anything implementing [`Transport`].

pub mod http;

pub use http::{HttpTransport, TransportError};

use crate::Result;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

/// A fully composed outbound call.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub url: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Raw inbound response, body not yet interpreted.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, request: PreparedRequest) -> Result<HttpResponse>;
}
