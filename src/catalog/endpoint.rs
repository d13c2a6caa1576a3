use serde::de::DeserializeOwned;
use serde::Serialize;

/// Compile-time binding of a versioned path to its parameter and response types.
///
/// Implemented by zero-sized markers such as [`crate::catalog::v1::MessageParser`]
/// and consumed by [`crate::KequtechClient::call`].
pub trait Endpoint {
    /// Versioned path, e.g. `/v1/message-parser`.
    const PATH: &'static str;
    type Parameters: Serialize + Send + Sync;
    type Response: DeserializeOwned + Send;
}
