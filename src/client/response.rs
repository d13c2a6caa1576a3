//! Response Normalizer: status, telemetry and a payload-or-error outcome.

use crate::validation::ValidationFailure;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::error;

/// Rate-limit state reported by the service for the calling actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitTelemetry {
    /// `-1` when the service did not say.
    pub limit: i64,
    /// `-1` when the service did not say.
    pub remaining: i64,
    /// Epoch seconds; `0` when absent.
    pub reset: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<i64>,
}

impl RateLimitTelemetry {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: header_number(headers, "x-ratelimit-limit").unwrap_or(-1),
            remaining: header_number(headers, "x-ratelimit-remaining").unwrap_or(-1),
            reset: header_number(headers, "x-ratelimit-reset").unwrap_or(0),
            retry_after: header_number(headers, "retry-after"),
        }
    }
}

fn header_number(headers: &HeaderMap, name: &str) -> Option<i64> {
    let raw = headers.get(name)?.to_str().ok()?.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v as i64))
}

/// Failure branch of a call.
///
/// Local schema rejections fill `message` and `parameter`. Remote application
/// errors relay the service's `error.cause` object as is, so any fields it
/// carries beyond `message` land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<ValidationFailure>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiError {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Relay a remote `error.cause`. Non-object causes yield an empty error.
    pub fn from_cause(cause: Option<&Value>) -> Self {
        let mut fields = match cause {
            Some(Value::Object(map)) => map.clone(),
            _ => return Self::default(),
        };

        let message = match fields.remove("message") {
            Some(Value::String(s)) => Some(s),
            Some(other) => {
                fields.insert("message".into(), other);
                None
            }
            None => None,
        };
        let parameter = match fields.remove("parameter") {
            Some(value) => match serde_json::from_value::<ValidationFailure>(value.clone()) {
                Ok(failure) => Some(failure),
                Err(_) => {
                    fields.insert("parameter".into(), value);
                    None
                }
            },
            None => None,
        };

        Self {
            message,
            parameter,
            extra: fields,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}", message),
            None => write!(f, "{}", Value::Object(self.extra.clone())),
        }
    }
}

impl std::error::Error for ApiError {}

/// Result of one call. Exactly one of payload or error, always with status.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T = Value> {
    pub status: u16,
    pub status_text: String,
    /// Present only when the call carried an actor id.
    pub rate_limit: Option<RateLimitTelemetry>,
    pub outcome: Result<T, ApiError>,
}

impl<T> ApiResponse<T> {
    /// Local schema rejection; no request was sent.
    pub fn unprocessable(error: ApiError) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
            status_text: "Unprocessable Entity".to_string(),
            rate_limit: None,
            outcome: Err(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn data(&self) -> Option<&T> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.outcome.as_ref().err()
    }

    pub fn into_result(self) -> Result<T, ApiError> {
        self.outcome
    }

    /// Convert the payload, keeping status and telemetry.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<ApiResponse<U>, E> {
        let outcome = match self.outcome {
            Ok(data) => Ok(f(data)?),
            Err(error) => Err(error),
        };
        Ok(ApiResponse {
            status: self.status,
            status_text: self.status_text,
            rate_limit: self.rate_limit,
            outcome,
        })
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("status", &self.status)?;
        map.serialize_entry("statusText", &self.status_text)?;
        if let Some(rate_limit) = &self.rate_limit {
            map.serialize_entry("rateLimit", rate_limit)?;
        }
        match &self.outcome {
            Ok(data) => {
                map.serialize_entry("ok", &true)?;
                map.serialize_entry("data", data)?;
            }
            Err(error) => {
                map.serialize_entry("ok", &false)?;
                map.serialize_entry("error", error)?;
            }
        }
        map.end()
    }
}

/// Interpret a raw HTTP response.
///
/// Unparsable (or `null`) bodies become a `[server unavailable]` failure and
/// are logged. Non-2xx statuses relay `error.cause`. Anything else is success.
pub fn normalize(
    status: StatusCode,
    status_text: &str,
    headers: &HeaderMap,
    body: &[u8],
    actor_id: Option<&str>,
) -> ApiResponse<Value> {
    let rate_limit = actor_id.map(|_| RateLimitTelemetry::from_headers(headers));

    let outcome = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Null) | Err(_) => {
            let text = std::str::from_utf8(body)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or("invalid response");
            error!(status = status.as_u16(), body = text, "unparsable response body");
            Err(ApiError::message(format!("[server unavailable] {}", text)))
        }
        Ok(data) if !status.is_success() => {
            Err(ApiError::from_cause(data.pointer("/error/cause")))
        }
        Ok(data) => Ok(data),
    };

    ApiResponse {
        status: status.as_u16(),
        status_text: status_text.to_string(),
        rate_limit,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use serde_json::json;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn telemetry_defaults_when_headers_absent() {
        let t = RateLimitTelemetry::from_headers(&HeaderMap::new());
        assert_eq!(
            t,
            RateLimitTelemetry {
                limit: -1,
                remaining: -1,
                reset: 0,
                retry_after: None
            }
        );
    }

    #[test]
    fn telemetry_reads_headers() {
        let t = RateLimitTelemetry::from_headers(&headers(&[
            ("x-ratelimit-limit", "60"),
            ("x-ratelimit-remaining", "42"),
            ("x-ratelimit-reset", "1767225600"),
            ("retry-after", "12"),
        ]));
        assert_eq!((t.limit, t.remaining, t.reset), (60, 42, 1_767_225_600));
        assert_eq!(t.retry_after, Some(12));
    }

    #[test]
    fn no_actor_means_no_telemetry() {
        let r = normalize(
            StatusCode::OK,
            "OK",
            &headers(&[("x-ratelimit-remaining", "42")]),
            br#"{"a":1}"#,
            None,
        );
        assert!(r.rate_limit.is_none());
        assert_eq!(r.data(), Some(&json!({ "a": 1 })));
    }

    #[test]
    fn unparsable_body_is_server_unavailable() {
        let r = normalize(StatusCode::BAD_GATEWAY, "Bad Gateway", &HeaderMap::new(), b"<html>oops</html>", Some("a"));
        assert_eq!(r.status, 502);
        assert_eq!(r.status_text, "Bad Gateway");
        assert_eq!(
            r.error().and_then(|e| e.message.as_deref()),
            Some("[server unavailable] <html>oops</html>")
        );

        let r = normalize(StatusCode::OK, "OK", &HeaderMap::new(), b"null", None);
        assert_eq!(
            r.error().and_then(|e| e.message.as_deref()),
            Some("[server unavailable] null")
        );

        let r = normalize(StatusCode::OK, "OK", &HeaderMap::new(), b"", None);
        assert_eq!(
            r.error().and_then(|e| e.message.as_deref()),
            Some("[server unavailable] invalid response")
        );
    }

    #[test]
    fn application_error_relays_cause() {
        let body = br#"{"error":{"cause":{"message":"Out of tokens","code":"tokens"}}}"#;
        let r = normalize(StatusCode::PAYMENT_REQUIRED, "Payment Required", &HeaderMap::new(), body, None);
        let err = r.error().unwrap();
        assert_eq!(err.message.as_deref(), Some("Out of tokens"));
        assert_eq!(err.extra.get("code"), Some(&json!("tokens")));

        let r = normalize(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", &HeaderMap::new(), b"{}", None);
        assert_eq!(r.error(), Some(&ApiError::default()));
    }

    #[test]
    fn serializes_to_discriminated_shape() {
        let ok = ApiResponse {
            status: 200,
            status_text: "OK".into(),
            rate_limit: None,
            outcome: Ok(json!({ "x": 1 })),
        };
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({ "status": 200, "statusText": "OK", "ok": true, "data": { "x": 1 } })
        );

        let failed: ApiResponse = ApiResponse {
            rate_limit: Some(RateLimitTelemetry {
                limit: 10,
                remaining: 0,
                reset: 5,
                retry_after: Some(3),
            }),
            ..ApiResponse::unprocessable(ApiError::message("nope"))
        };
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({
                "status": 422,
                "statusText": "Unprocessable Entity",
                "rateLimit": { "limit": 10, "remaining": 0, "reset": 5, "retryAfter": 3 },
                "ok": false,
                "error": { "message": "nope" }
            })
        );
    }
}
