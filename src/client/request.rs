//! Request Builder: target URL, headers and body for one call.

use super::options::ActorLimits;
use crate::transport::PreparedRequest;
use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

/// Outbound per-actor rate-limit directive.
pub const RATE_LIMIT_HEADER: &str = "x-kequtech-rate-limit";

static ACTOR_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[^"]{1,128}$"#).expect("actor id pattern is valid"));

/// Holds the host and credential; stamps out requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    host: String,
    authorization: HeaderValue,
}

impl RequestBuilder {
    /// Fails when the credential is empty or cannot be carried in a header.
    pub fn new(host: impl Into<String>, api_key: &str) -> Result<Self> {
        if api_key.is_empty() {
            return Err(Error::configuration_with_context(
                "Kequtech Api Key required",
                ErrorContext::new()
                    .with_field_path("builder.api_key")
                    .with_source("request_builder"),
            ));
        }
        let mut authorization =
            HeaderValue::from_str(&format!("Api-Key {}", api_key)).map_err(|_| {
                Error::configuration_with_context(
                    "Api key contains characters not allowed in a header",
                    ErrorContext::new()
                        .with_field_path("builder.api_key")
                        .with_source("request_builder"),
                )
            })?;
        authorization.set_sensitive(true);

        Ok(Self {
            host: host.into(),
            authorization,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Headers for a call; validates the actor directive when present.
    pub fn headers(&self, actor: Option<&ActorLimits>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, self.authorization.clone());

        if let Some(limits) = actor {
            let directive = rate_limit_directive(limits)?;
            let value = HeaderValue::from_bytes(directive.as_bytes())
                .map_err(|_| invalid_actor(&limits.actor_id))?;
            headers.insert(HeaderName::from_static(RATE_LIMIT_HEADER), value);
        }

        Ok(headers)
    }

    /// Compose the POST for `path` with `parameters` as the JSON body.
    pub fn build(
        &self,
        path: &str,
        headers: HeaderMap,
        parameters: &Value,
    ) -> Result<PreparedRequest> {
        Ok(PreparedRequest {
            url: format!("{}{}", self.host, path),
            headers,
            body: Bytes::from(serde_json::to_vec(parameters)?),
        })
    }
}

/// Encode `actorId="<id>"; max=<n>; seconds=<n>` with optional trailing fields.
pub fn rate_limit_directive(limits: &ActorLimits) -> Result<String> {
    if !ACTOR_ID.is_match(&limits.actor_id) {
        return Err(invalid_actor(&limits.actor_id));
    }

    let mut parts = vec![format!("actorId=\"{}\"", limits.actor_id)];
    if let Some(max) = limits.max {
        parts.push(format!("max={}", whole_limit("max", max)?));
    }
    if let Some(seconds) = limits.seconds {
        parts.push(format!("seconds={}", whole_limit("seconds", seconds)?));
    }

    Ok(parts.join("; "))
}

fn whole_limit(name: &str, value: f64) -> Result<u64> {
    if !value.is_finite() || value < 1.0 {
        return Err(Error::configuration_with_context(
            format!("Invalid {}: {}", name, value),
            ErrorContext::new()
                .with_field_path(format!("options.actor.{}", name))
                .with_source("request_builder"),
        ));
    }
    Ok(value.floor() as u64)
}

fn invalid_actor(actor_id: &str) -> Error {
    Error::configuration_with_context(
        format!("Invalid uid: {}", actor_id),
        ErrorContext::new()
            .with_field_path("options.actor.actor_id")
            .with_source("request_builder"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn builder() -> RequestBuilder {
        RequestBuilder::new("https://api.kequtech.com", "secret").unwrap()
    }

    #[test]
    fn empty_key_is_rejected() {
        let err = RequestBuilder::new("https://api.kequtech.com", "").unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("Kequtech Api Key required"));
    }

    #[test]
    fn builds_url_headers_and_body() {
        let b = builder();
        let headers = b.headers(None).unwrap();
        let req = b
            .build("/v1/message-parser", headers, &json!({ "message": "hello there" }))
            .unwrap();
        assert_eq!(req.url, "https://api.kequtech.com/v1/message-parser");
        assert_eq!(req.headers[CONTENT_TYPE], "application/json");
        assert_eq!(req.headers[AUTHORIZATION], "Api-Key secret");
        assert!(req.headers.get(RATE_LIMIT_HEADER).is_none());
        assert_eq!(&req.body[..], br#"{"message":"hello there"}"#);
    }

    #[test]
    fn directive_fields_are_independent() {
        assert_eq!(
            rate_limit_directive(&ActorLimits::new("user-1")).unwrap(),
            r#"actorId="user-1""#
        );
        assert_eq!(
            rate_limit_directive(&ActorLimits::new("user-1").seconds(30.0)).unwrap(),
            r#"actorId="user-1"; seconds=30"#
        );
        assert_eq!(
            rate_limit_directive(&ActorLimits::new("user-1").max(10.9).seconds(60.2)).unwrap(),
            r#"actorId="user-1"; max=10; seconds=60"#
        );
    }

    #[test]
    fn directive_is_attached_as_header() {
        let headers = builder()
            .headers(Some(&ActorLimits::new("ünïcode user").max(5.0)))
            .unwrap();
        assert_eq!(
            headers[RATE_LIMIT_HEADER].as_bytes(),
            "actorId=\"ünïcode user\"; max=5".as_bytes()
        );
    }

    #[test]
    fn bad_actor_ids_are_fatal() {
        for id in ["", "has\"quote", &"x".repeat(129)] {
            let err = rate_limit_directive(&ActorLimits::new(id)).unwrap_err();
            assert!(err.to_string().contains("Invalid uid"), "{}", err);
        }
        assert!(rate_limit_directive(&ActorLimits::new("x".repeat(128))).is_ok());
    }

    #[test]
    fn bad_limits_are_fatal() {
        let err = rate_limit_directive(&ActorLimits::new("a").max(0.5)).unwrap_err();
        assert!(err.to_string().contains("Invalid max: 0.5"));
        let err = rate_limit_directive(&ActorLimits::new("a").seconds(f64::NAN)).unwrap_err();
        assert!(err.to_string().contains("Invalid seconds: NaN"));
    }
}
