//! Client facade and the request/response halves of the call pipeline.
//!
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
pub mod options;
pub mod request;
pub mod response;

pub use builder::{KequtechClientBuilder, DEFAULT_HOST};
pub use core::KequtechClient;
pub use options::{ActorLimits, CallOptions};
pub use request::{rate_limit_directive, RequestBuilder, RATE_LIMIT_HEADER};
pub use response::{normalize, ApiError, ApiResponse, RateLimitTelemetry};
